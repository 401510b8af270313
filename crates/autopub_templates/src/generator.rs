//! Workflow generation driver.
//!
//! A run validates the whole catalog, loads the template once, and renders
//! every workflow in memory before anything is written. Writes then happen
//! in catalog order and stop at the first failure.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use autopub_spec::{SpecCatalog, SpecValidator};

use crate::error::{TemplateError, TemplateResult};
use crate::loader::{load_template, LocalFs, TemplateFs};
use crate::renderer::TemplateRenderer;

/// Default location of the workflow template.
pub const DEFAULT_TEMPLATE_PATH: &str = ".github/auto-publish-template.yml";

/// Default directory receiving the generated workflows.
pub const DEFAULT_OUTPUT_DIR: &str = ".github/workflows";

/// Default workflow file extension.
pub const DEFAULT_EXTENSION: &str = "yml";

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
    /// Remove generated workflows whose spec left the catalog
    pub prune: bool,
    /// Render and report, but do not touch the output directory
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            prune: false,
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// A rendered workflow and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWorkflow {
    pub shortname: String,
    pub path: PathBuf,
    pub content: String,
}

/// Outcome of [`WorkflowGenerator::generate`].
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub workflows: Vec<GeneratedWorkflow>,
    pub pruned: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Outcome of [`WorkflowGenerator::check`].
#[derive(Debug, Default)]
pub struct CheckReport {
    pub up_to_date: Vec<PathBuf>,
    /// Present on disk with different content
    pub stale: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
    /// Generated files that no catalog entry produces anymore
    pub orphaned: Vec<PathBuf>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty() && self.missing.is_empty() && self.orphaned.is_empty()
    }
}

/// Renders one workflow per catalog entry.
pub struct WorkflowGenerator<F: TemplateFs = LocalFs> {
    config: GeneratorConfig,
    renderer: TemplateRenderer,
    fs: F,
}

impl WorkflowGenerator<LocalFs> {
    /// Generator working on the local filesystem.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_fs(config, LocalFs)
    }
}

impl<F: TemplateFs> WorkflowGenerator<F> {
    pub fn with_fs(config: GeneratorConfig, fs: F) -> Self {
        Self {
            config,
            renderer: TemplateRenderer::new(),
            fs,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render every workflow without writing anything.
    pub fn prepare(&self, catalog: &SpecCatalog) -> TemplateResult<Vec<GeneratedWorkflow>> {
        let validation = SpecValidator::validate_catalog(catalog);
        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        if !validation.valid {
            return Err(TemplateError::InvalidCatalog(validation.errors.join("; ")));
        }
        let specs = catalog.normalize_all()?;

        let template = load_template(&self.fs, &self.config.template_path)?;
        let template = self.renderer.rewrite_header(&template);
        for name in self.renderer.unknown_placeholders(&template) {
            warn!("Template placeholder {{{{{}}}}} is not a spec field and will be kept", name);
        }

        let workflows = specs
            .into_iter()
            .map(|spec| {
                let path = self
                    .config
                    .output_dir
                    .join(spec.workflow_file_name(&self.config.extension));
                debug!("Rendered workflow for {} -> {:?}", spec.shortname, path);
                GeneratedWorkflow {
                    content: self.renderer.render(&template, &spec),
                    shortname: spec.shortname,
                    path,
                }
            })
            .collect();

        Ok(workflows)
    }

    /// Render and write every workflow, aborting on the first write error.
    pub fn generate(&self, catalog: &SpecCatalog) -> TemplateResult<GenerationReport> {
        let workflows = self.prepare(catalog)?;
        let dry_run = self.config.dry_run;

        info!(
            "Generating {} workflow(s) in {:?}{}",
            workflows.len(),
            self.config.output_dir,
            if dry_run { " (dry run)" } else { "" }
        );

        if !dry_run {
            self.fs
                .create_dir_all(&self.config.output_dir)
                .map_err(|source| TemplateError::OutputDir {
                    path: self.config.output_dir.clone(),
                    source,
                })?;
        }

        for workflow in &workflows {
            if dry_run {
                info!("Would write {:?}", workflow.path);
                continue;
            }
            self.fs
                .write(&workflow.path, &workflow.content)
                .map_err(|source| TemplateError::WriteFailed {
                    shortname: workflow.shortname.clone(),
                    path: workflow.path.clone(),
                    source,
                })?;
            info!("Wrote {:?}", workflow.path);
        }

        let pruned = if self.config.prune {
            self.prune(&workflows, dry_run)?
        } else {
            Vec::new()
        };

        Ok(GenerationReport {
            workflows,
            pruned,
            dry_run,
        })
    }

    /// Compare rendered workflows with what is on disk.
    pub fn check(&self, catalog: &SpecCatalog) -> TemplateResult<CheckReport> {
        let workflows = self.prepare(catalog)?;
        let mut report = CheckReport::default();

        for workflow in &workflows {
            if !self.fs.exists(&workflow.path) {
                debug!("Missing workflow {:?}", workflow.path);
                report.missing.push(workflow.path.clone());
                continue;
            }
            let current = self
                .fs
                .read_to_string(&workflow.path)
                .map_err(|source| TemplateError::ReadFailed {
                    path: workflow.path.clone(),
                    source,
                })?;
            if current == workflow.content {
                report.up_to_date.push(workflow.path.clone());
            } else {
                debug!("Stale workflow {:?}", workflow.path);
                report.stale.push(workflow.path.clone());
            }
        }

        report.orphaned = self.orphans(&workflows)?;
        Ok(report)
    }

    /// Generated files in the output directory not produced by `workflows`.
    ///
    /// Only the output directory is listed, so file names identify workflows;
    /// comparing whole paths would trip over `./` prefixes.
    fn orphans(&self, workflows: &[GeneratedWorkflow]) -> TemplateResult<Vec<PathBuf>> {
        let produced: HashSet<&OsStr> = workflows
            .iter()
            .filter_map(|w| w.path.file_name())
            .collect();
        let existing = self
            .fs
            .workflow_files(&self.config.output_dir, &self.config.extension)?;

        Ok(existing
            .into_iter()
            .filter(|path| path.file_name().map_or(true, |name| !produced.contains(name)))
            .collect())
    }

    fn prune(&self, workflows: &[GeneratedWorkflow], dry_run: bool) -> TemplateResult<Vec<PathBuf>> {
        let orphans = self.orphans(workflows)?;
        for path in &orphans {
            if dry_run {
                info!("Would remove stale workflow {:?}", path);
                continue;
            }
            self.fs
                .remove_file(path)
                .map_err(|source| TemplateError::RemoveFailed {
                    path: path.clone(),
                    source,
                })?;
            info!("Removed stale workflow {:?}", path);
        }
        Ok(orphans)
    }
}
