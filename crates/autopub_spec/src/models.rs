//! Spec record data models.
//!
//! A [`SpecRecord`] is one entry of the catalog as written by a maintainer,
//! with every derivable field optional. A [`NormalizedSpec`] is the same
//! record after the derivation rules have filled in the gaps; it is what the
//! template renderer consumes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix for workflow files produced by the generator.
pub const WORKFLOW_FILE_PREFIX: &str = "auto-publish-";

/// Publication status codes accepted by the W3C publication system.
pub const KNOWN_STATUSES: &[&str] = &[
    "WD", "CR", "CRD", "PR", "REC", "NOTE", "DNOTE", "NOTE-WD", "NOTE-FPWD", "FPWD", "DRY",
    "CRY", "RY", "STMT", "ED",
];

/// One specification to publish, as configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpecRecord {
    /// Internal identifier, derived from the source file name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,
    /// Status on /TR, e.g. "WD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_status: Option<String>,
    /// Relative path to the source file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Relative path of the published file in the gh-pages branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Name of the repository secret holding the Echidna token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    /// Extra paths (globs allowed) that should trigger publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_paths: Option<Vec<String>>,
}

impl SpecRecord {
    /// Create a record from its two required fields.
    pub fn new(source: impl Into<String>, publication_status: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            publication_status: Some(publication_status.into()),
            ..Default::default()
        }
    }

    pub fn with_shortname(mut self, shortname: impl Into<String>) -> Self {
        self.shortname = Some(shortname.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_token_name(mut self, token_name: impl Into<String>) -> Self {
        self.token_name = Some(token_name.into());
        self
    }

    pub fn with_additional_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }
}

/// The closed set of fields a template may reference as `{{name}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecField {
    Shortname,
    PublicationStatus,
    Source,
    Destination,
    TokenName,
    AdditionalPaths,
}

impl SpecField {
    pub const ALL: [SpecField; 6] = [
        SpecField::Shortname,
        SpecField::PublicationStatus,
        SpecField::Source,
        SpecField::Destination,
        SpecField::TokenName,
        SpecField::AdditionalPaths,
    ];

    /// Placeholder name as written in templates.
    pub fn name(self) -> &'static str {
        match self {
            SpecField::Shortname => "shortname",
            SpecField::PublicationStatus => "publicationStatus",
            SpecField::Source => "source",
            SpecField::Destination => "destination",
            SpecField::TokenName => "tokenName",
            SpecField::AdditionalPaths => "additionalPaths",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for SpecField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record with every field populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSpec {
    pub shortname: String,
    pub publication_status: String,
    pub source: String,
    pub destination: String,
    pub token_name: String,
    /// Pre-rendered YAML list fragment, empty when there are no extra paths
    pub additional_paths: String,
}

impl NormalizedSpec {
    /// Value substituted for a placeholder.
    pub fn field(&self, field: SpecField) -> &str {
        match field {
            SpecField::Shortname => &self.shortname,
            SpecField::PublicationStatus => &self.publication_status,
            SpecField::Source => &self.source,
            SpecField::Destination => &self.destination,
            SpecField::TokenName => &self.token_name,
            SpecField::AdditionalPaths => &self.additional_paths,
        }
    }

    /// File name of the workflow generated for this spec.
    pub fn workflow_file_name(&self, extension: &str) -> String {
        format!("{}{}.{}", WORKFLOW_FILE_PREFIX, self.shortname, extension)
    }

    /// Whether the publication status is one the publication system knows.
    pub fn has_known_status(&self) -> bool {
        KNOWN_STATUSES.contains(&self.publication_status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in SpecField::ALL {
            assert_eq!(SpecField::from_name(field.name()), Some(field));
        }
        assert_eq!(SpecField::from_name("unknownField"), None);
        assert_eq!(SpecField::from_name("ShortName"), None);
    }

    #[test]
    fn test_record_deserializes_camel_case() {
        let yaml = r#"
source: video_frame_metadata_registry.src.html
publicationStatus: DRY
tokenName: ECHIDNA_TOKEN_VIDEOFRAMEMETADATA_REGISTRY
additionalPaths:
  - images/*.svg
"#;
        let record: SpecRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.publication_status.as_deref(), Some("DRY"));
        assert_eq!(
            record.token_name.as_deref(),
            Some("ECHIDNA_TOKEN_VIDEOFRAMEMETADATA_REGISTRY")
        );
        assert_eq!(record.additional_paths, Some(vec!["images/*.svg".to_string()]));
        assert!(record.shortname.is_none());
    }

    #[test]
    fn test_record_rejects_unknown_keys() {
        let yaml = "source: index.src.html\npublicationStatus: WD\nstatus: WD\n";
        assert!(serde_yaml::from_str::<SpecRecord>(yaml).is_err());
    }

    #[test]
    fn test_workflow_file_name() {
        let spec = NormalizedSpec {
            shortname: "webcodecs".into(),
            publication_status: "WD".into(),
            source: "index.src.html".into(),
            destination: "index.html".into(),
            token_name: "ECHIDNA_TOKEN_WEBCODECS".into(),
            additional_paths: String::new(),
        };
        assert_eq!(spec.workflow_file_name("yml"), "auto-publish-webcodecs.yml");
        assert!(spec.has_known_status());
    }
}
