//! Catalog validation.
//!
//! Unlike [`SpecCatalog::normalize_all`], which stops at the first problem,
//! the validator reports every problem in the catalog at once.

use std::collections::HashMap;

use crate::catalog::SpecCatalog;
use crate::normalizer::normalize;

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for spec catalogs.
pub struct SpecValidator;

impl SpecValidator {
    /// Validate every record and the catalog as a whole.
    pub fn validate_catalog(catalog: &SpecCatalog) -> ValidationResult {
        let mut result = ValidationResult::new();

        if catalog.is_empty() {
            result.add_warning("Spec catalog is empty, no workflow will be generated");
            return result;
        }

        let mut shortnames: HashMap<String, usize> = HashMap::new();
        let mut destinations: HashMap<String, usize> = HashMap::new();
        let mut tokens: HashMap<String, usize> = HashMap::new();

        for (i, record) in catalog.records().iter().enumerate() {
            let index = i + 1;
            let spec = match normalize(record) {
                Ok(spec) => spec,
                Err(e) => {
                    result.add_error(format!("Spec record #{}: {}", index, e));
                    continue;
                }
            };

            if !spec.has_known_status() {
                result.add_warning(format!(
                    "Spec '{}' has unknown publication status '{}'",
                    spec.shortname, spec.publication_status
                ));
            }

            if let Some(first) = shortnames.insert(spec.shortname.clone(), index) {
                result.add_error(format!(
                    "Spec records #{} and #{} share shortname '{}'",
                    first, index, spec.shortname
                ));
            }

            if let Some(first) = destinations.insert(spec.destination.clone(), index) {
                result.add_error(format!(
                    "Spec records #{} and #{} publish to the same destination '{}'",
                    first, index, spec.destination
                ));
            }

            if let Some(first) = tokens.insert(spec.token_name.clone(), index) {
                result.add_warning(format!(
                    "Spec records #{} and #{} use the same token secret '{}'",
                    first, index, spec.token_name
                ));
            }
        }

        result
    }
}
