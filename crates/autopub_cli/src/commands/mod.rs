//! CLI command definitions.
//!
//! Every command shares the same inputs: a spec catalog (built-in or a
//! YAML file), the workflow template and the output directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use autopub_spec::SpecCatalog;
use autopub_templates::{
    GeneratorConfig, DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE_PATH,
};

pub mod check;
pub mod generate;
pub mod list;
pub mod validate;

pub use generate::GenerateArgs;

/// autopub - auto-publish workflow generator
#[derive(Parser)]
#[command(name = "autopub")]
#[command(version, about = "Generate one auto-publish CI workflow per specification")]
#[command(long_about = r#"
autopub renders the auto-publish workflow template once per specification
and writes the results to the workflows directory. Run it whenever the
template or the list of specifications changes.

COMMANDS:
  generate  → Render and write all workflows (default)
  check     → Fail if any workflow differs from what would be generated
  list      → Show every spec with its derived fields
  validate  → Report problems in the spec catalog

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Spec catalog validation failure
  4 - Template read or workflow write error
  5 - Generated workflows out of date
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(flatten)]
    pub paths: PathArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Locations shared by every command.
#[derive(Args, Clone, Debug)]
pub struct PathArgs {
    /// YAML spec catalog (uses the built-in catalog if not specified)
    #[arg(long, global = true, env = "AUTOPUB_SPECS")]
    pub specs: Option<PathBuf>,

    /// Workflow template
    #[arg(long, global = true, env = "AUTOPUB_TEMPLATE", default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// Directory receiving the generated workflows
    #[arg(long, global = true, env = "AUTOPUB_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Extension of the generated workflow files
    #[arg(long, global = true, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render and write one workflow per spec
    Generate(GenerateArgs),

    /// Verify the generated workflows are up to date
    Check,

    /// List the specs with their derived fields
    List(list::ListArgs),

    /// Validate the spec catalog
    Validate,
}

/// Options resolved from the command line, shared by all commands.
pub struct RunContext {
    pub paths: PathArgs,
    pub quiet: bool,
}

impl Cli {
    pub fn context(&self) -> RunContext {
        RunContext {
            paths: self.paths.clone(),
            quiet: self.quiet,
        }
    }
}

impl RunContext {
    /// The catalog file if one was given, the built-in catalog otherwise.
    pub fn load_catalog(&self) -> Result<SpecCatalog> {
        match &self.paths.specs {
            Some(path) => SpecCatalog::load(path)
                .with_context(|| format!("Failed to load spec catalog {}", path.display())),
            None => {
                info!("Using built-in spec catalog");
                Ok(SpecCatalog::builtin())
            }
        }
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_template_path(&self.paths.template)
            .with_output_dir(&self.paths.output_dir)
            .with_extension(&self.paths.extension)
    }
}
