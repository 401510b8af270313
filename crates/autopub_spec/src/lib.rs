//! # autopub_spec
//!
//! The catalog of specifications published by a repository, and the rules
//! that turn each configured record into a fully-populated one.
//!
//! ## Derivation rules
//!
//! Only `source` and `publicationStatus` are required. When absent:
//!
//! - `shortname` is the source file name up to its first `.`, with `_`
//!   replaced by `-`
//! - `destination` is the source with its first `.src` removed
//! - `tokenName` is `ECHIDNA_TOKEN_` followed by the uppercased shortname,
//!   `-` replaced by `_`, without the `_CODEC_` infix
//!
//! ## Example
//!
//! ```rust
//! use autopub_spec::{normalize, SpecRecord};
//!
//! let record = SpecRecord::new("vp9_codec_registration.src.html", "NOTE-WD");
//! let spec = normalize(&record).unwrap();
//!
//! assert_eq!(spec.shortname, "vp9-codec-registration");
//! assert_eq!(spec.destination, "vp9_codec_registration.html");
//! assert_eq!(spec.token_name, "ECHIDNA_TOKEN_VP9_REGISTRATION");
//! ```

pub mod catalog;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod validator;

pub use catalog::SpecCatalog;
pub use error::{SpecError, SpecResult};
pub use models::*;
pub use normalizer::{
    derive_destination, derive_shortname, derive_token_name, format_additional_paths, normalize,
};
pub use validator::{SpecValidator, ValidationResult};
