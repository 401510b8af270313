//! Error types for workflow generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while rendering or writing workflows.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read workflow template {path:?}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid spec catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write workflow for '{shortname}' to {path:?}: {source}")]
    WriteFailed {
        shortname: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read existing workflow {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove stale workflow {path:?}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spec error: {0}")]
    Spec(#[from] autopub_spec::SpecError),
}
