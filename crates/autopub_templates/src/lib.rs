//! # autopub_templates
//!
//! Generates one auto-publish CI workflow per spec from a shared template.
//!
//! The template is a YAML workflow with `{{field}}` placeholders for the
//! spec fields (`shortname`, `publicationStatus`, `source`, `destination`,
//! `tokenName`, `additionalPaths`). Its leading `#####` comment block is
//! replaced with a "do not edit" banner in every generated file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use autopub_spec::SpecCatalog;
//! use autopub_templates::{GeneratorConfig, WorkflowGenerator};
//!
//! let generator = WorkflowGenerator::new(GeneratorConfig::default());
//! let report = generator.generate(&SpecCatalog::builtin()).unwrap();
//!
//! for workflow in &report.workflows {
//!     println!("{}", workflow.path.display());
//! }
//! ```

pub mod error;
pub mod generator;
pub mod loader;
pub mod renderer;

pub use error::{TemplateError, TemplateResult};
pub use generator::{
    CheckReport, GeneratedWorkflow, GenerationReport, GeneratorConfig, WorkflowGenerator,
    DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE_PATH,
};
pub use loader::{load_template, LocalFs, TemplateFs};
pub use renderer::{TemplateRenderer, GENERATED_BANNER};
