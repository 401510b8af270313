//! Derivation of missing record fields.
//!
//! Normalization never mutates the configured record; it builds a new
//! [`NormalizedSpec`] from the record's own fields only.

use std::path::Path;

use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::models::{NormalizedSpec, SpecRecord};

/// Prefix of every derived Echidna token secret name.
pub const TOKEN_PREFIX: &str = "ECHIDNA_TOKEN_";

/// Indentation of additional path entries inside the workflow `paths:` list.
const PATH_INDENT: &str = "      ";

/// Fill in every optional field of `record`.
pub fn normalize(record: &SpecRecord) -> SpecResult<NormalizedSpec> {
    let source = required(record.source.as_deref(), "source")?;
    let publication_status = required(record.publication_status.as_deref(), "publicationStatus")?;

    let shortname = match present(record.shortname.as_deref()) {
        Some(shortname) => shortname.to_string(),
        None => derive_shortname(source),
    };
    validate_shortname(&shortname)?;

    let destination = match present(record.destination.as_deref()) {
        Some(destination) => destination.to_string(),
        None => derive_destination(source),
    };

    let token_name = match present(record.token_name.as_deref()) {
        Some(token_name) => token_name.to_string(),
        None => derive_token_name(&shortname),
    };

    let additional_paths = record
        .additional_paths
        .as_deref()
        .map(format_additional_paths)
        .unwrap_or_default();

    debug!(
        shortname = %shortname,
        destination = %destination,
        token_name = %token_name,
        "Normalized spec record"
    );

    Ok(NormalizedSpec {
        shortname,
        publication_status: publication_status.to_string(),
        source: source.to_string(),
        destination,
        token_name,
        additional_paths,
    })
}

/// Shortname from the source file name: everything before the first `.`,
/// with `_` replaced by `-`.
pub fn derive_shortname(source: &str) -> String {
    let file_name = Path::new(source)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string());

    file_name
        .split('.')
        .next()
        .unwrap_or_default()
        .replace('_', "-")
}

/// Destination path: the source with its first `.src` removed.
pub fn derive_destination(source: &str) -> String {
    source.replacen(".src", "", 1)
}

/// Token secret name for a shortname.
///
/// `vp9-codec-registration` becomes `ECHIDNA_TOKEN_VP9_REGISTRATION`: token
/// names never carry the `_CODEC_` infix.
pub fn derive_token_name(shortname: &str) -> String {
    let upper = shortname.to_uppercase().replace('-', "_");
    format!("{}{}", TOKEN_PREFIX, upper.replacen("_CODEC_", "_", 1))
}

/// Render extra trigger paths as entries of a YAML block list.
pub fn format_additional_paths(paths: &[String]) -> String {
    paths
        .iter()
        .map(|path| format!("\n{}- '{}'", PATH_INDENT, path))
        .collect()
}

/// Check that a shortname can be used in a file name and a token name.
pub fn validate_shortname(shortname: &str) -> SpecResult<()> {
    let invalid = |reason: &str| SpecError::InvalidShortname {
        shortname: shortname.to_string(),
        reason: reason.to_string(),
    };

    let first = shortname.chars().next().ok_or_else(|| invalid("shortname is empty"))?;
    if !first.is_ascii_alphanumeric() {
        return Err(invalid("must start with an ASCII letter or digit"));
    }
    if let Some(c) = shortname
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(&format!("unexpected character '{}'", c)));
    }
    Ok(())
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> SpecResult<&'a str> {
    present(value).ok_or(SpecError::MissingField(field))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_shortname() {
        assert_eq!(
            derive_shortname("vp9_codec_registration.src.html"),
            "vp9-codec-registration"
        );
        assert_eq!(
            derive_shortname("aac_codec_registration.src.html"),
            "aac-codec-registration"
        );
        assert_eq!(derive_shortname("index.src.html"), "index");
        assert_eq!(derive_shortname("drafts/foo_bar.bs"), "foo-bar");
        assert_eq!(derive_shortname("README"), "README");
    }

    #[test]
    fn test_derive_destination() {
        assert_eq!(derive_destination("index.src.html"), "index.html");
        assert_eq!(derive_destination("a.src.src.html"), "a.src.html");
        assert_eq!(derive_destination("index.bs"), "index.bs");
    }

    #[test]
    fn test_derive_token_name() {
        assert_eq!(
            derive_token_name("vp9-codec-registration"),
            "ECHIDNA_TOKEN_VP9_REGISTRATION"
        );
        assert_eq!(derive_token_name("webcodecs"), "ECHIDNA_TOKEN_WEBCODECS");
        assert_eq!(
            derive_token_name("codec-registry"),
            "ECHIDNA_TOKEN_CODEC_REGISTRY"
        );
        assert_eq!(
            derive_token_name("video-frame-metadata-registry"),
            "ECHIDNA_TOKEN_VIDEO_FRAME_METADATA_REGISTRY"
        );
    }

    #[test]
    fn test_format_additional_paths() {
        assert_eq!(format_additional_paths(&[]), "");
        let paths = vec!["images/*.svg".to_string(), "common.js".to_string()];
        assert_eq!(
            format_additional_paths(&paths),
            "\n      - 'images/*.svg'\n      - 'common.js'"
        );
    }

    #[test]
    fn test_normalize_derives_missing_fields() {
        let record = SpecRecord::new("vp9_codec_registration.src.html", "NOTE-WD");
        let spec = normalize(&record).unwrap();

        assert_eq!(spec.shortname, "vp9-codec-registration");
        assert_eq!(spec.destination, "vp9_codec_registration.html");
        assert_eq!(spec.token_name, "ECHIDNA_TOKEN_VP9_REGISTRATION");
        assert_eq!(spec.additional_paths, "");
        assert_eq!(spec.publication_status, "NOTE-WD");
    }

    #[test]
    fn test_normalize_keeps_explicit_fields() {
        let record = SpecRecord::new("video_frame_metadata_registry.src.html", "DRY")
            .with_shortname("vfm-registry")
            .with_destination("registry/index.html")
            .with_token_name("ECHIDNA_TOKEN_VIDEOFRAMEMETADATA_REGISTRY");
        let spec = normalize(&record).unwrap();

        assert_eq!(spec.shortname, "vfm-registry");
        assert_eq!(spec.destination, "registry/index.html");
        assert_eq!(spec.token_name, "ECHIDNA_TOKEN_VIDEOFRAMEMETADATA_REGISTRY");
    }

    #[test]
    fn test_normalize_does_not_touch_input() {
        let record = SpecRecord::new("index.src.html", "WD");
        let before = record.clone();
        normalize(&record).unwrap();
        assert_eq!(record, before);
    }

    #[test]
    fn test_normalize_missing_source() {
        let record = SpecRecord {
            publication_status: Some("WD".into()),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&record),
            Err(SpecError::MissingField("source"))
        ));

        let blank = SpecRecord::new("  ", "WD");
        assert!(matches!(
            normalize(&blank),
            Err(SpecError::MissingField("source"))
        ));
    }

    #[test]
    fn test_normalize_missing_status() {
        let record = SpecRecord {
            source: Some("index.src.html".into()),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&record),
            Err(SpecError::MissingField("publicationStatus"))
        ));
    }

    #[test]
    fn test_validate_shortname_accepts_underscores() {
        assert!(validate_shortname("video_frame-metadata2").is_ok());
        assert!(validate_shortname("_leading").is_err());
        assert!(validate_shortname("a.b").is_err());
    }

    #[test]
    fn test_normalize_rejects_unusable_shortname() {
        let record = SpecRecord::new("index.src.html", "WD").with_shortname("web codecs");
        assert!(matches!(
            normalize(&record),
            Err(SpecError::InvalidShortname { .. })
        ));

        let hidden = SpecRecord::new(".hidden.src.html", "WD");
        assert!(matches!(
            normalize(&hidden),
            Err(SpecError::InvalidShortname { .. })
        ));
    }
}
