//! autopub CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Spec catalog validation failure
//! - 4: Template read or workflow write error
//! - 5: Generated workflows out of date

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use autopub_spec::SpecError;
use autopub_templates::TemplateError;

mod commands;

use commands::{check::OutOfDate, Cli, Commands, GenerateArgs};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const OUT_OF_DATE: u8 = 5;
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCodes::INVALID_ARGS
            } else {
                ExitCodes::SUCCESS
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(&cli);

    let ctx = cli.context();
    let result = match cli.command.unwrap_or(Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => commands::generate::execute(args, &ctx),
        Commands::Check => commands::check::execute(&ctx),
        Commands::List(args) => commands::list::execute(args, &ctx),
        Commands::Validate => commands::validate::execute(&ctx),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Log to stderr, `RUST_LOG` taking precedence over the verbosity flags.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,autopub={}", level)));

    // Already initialized is fine.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<OutOfDate>().is_some() {
        return ExitCodes::OUT_OF_DATE;
    }
    if let Some(err) = e.downcast_ref::<TemplateError>() {
        return match err {
            TemplateError::InvalidCatalog(_) | TemplateError::Spec(_) => {
                ExitCodes::VALIDATION_FAILURE
            }
            _ => ExitCodes::TEMPLATE_ERROR,
        };
    }
    if e.downcast_ref::<SpecError>().is_some() {
        return ExitCodes::VALIDATION_FAILURE;
    }
    ExitCodes::GENERAL_ERROR
}
