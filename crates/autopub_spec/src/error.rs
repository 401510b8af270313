//! Error types for the spec catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading or normalizing spec records.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Spec catalog not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Spec record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<SpecError>,
    },

    #[error("Invalid shortname '{shortname}': {reason}")]
    InvalidShortname { shortname: String, reason: String },

    #[error("Duplicate shortname '{0}': workflow files would overwrite each other")]
    DuplicateShortname(String),

    #[error("Spec validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
