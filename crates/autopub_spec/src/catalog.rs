//! The list of specs a generation run publishes.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SpecError, SpecResult};
use crate::models::{NormalizedSpec, SpecRecord};
use crate::normalizer::normalize;

/// Codec registrations published as notes, in publication order.
const CODEC_REGISTRATIONS: &[&str] = &[
    "avc", "vorbis", "mp3", "aac", "flac", "opus", "av1", "vp9", "vp8", "pcm", "alaw", "ulaw",
    "hevc",
];

/// On-disk catalog document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    specs: Vec<SpecRecord>,
}

/// Immutable, ordered list of spec records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecCatalog {
    records: Vec<SpecRecord>,
}

impl SpecCatalog {
    pub fn new(records: Vec<SpecRecord>) -> Self {
        Self { records }
    }

    /// The WebCodecs repository's specs.
    pub fn builtin() -> Self {
        let mut records = vec![
            SpecRecord::new("index.src.html", "WD").with_shortname("webcodecs"),
            SpecRecord::new("codec_registry.src.html", "DRY"),
        ];
        records.extend(CODEC_REGISTRATIONS.iter().map(|codec| {
            SpecRecord::new(format!("{}_codec_registration.src.html", codec), "NOTE-WD")
        }));
        records.push(
            SpecRecord::new("video_frame_metadata_registry.src.html", "DRY")
                .with_token_name("ECHIDNA_TOKEN_VIDEOFRAMEMETADATA_REGISTRY"),
        );
        Self { records }
    }

    /// Parse a YAML catalog document (`specs: [...]`).
    pub fn from_yaml_str(content: &str) -> SpecResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Ok(Self::new(file.specs))
    }

    /// Load a YAML catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> SpecResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SpecError::NotFound(path.to_path_buf()));
        }
        debug!("Reading spec catalog from {:?}", path);

        let content = fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        info!("Loaded {} spec record(s) from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Serialize the catalog back to its YAML form.
    pub fn to_yaml_string(&self) -> SpecResult<String> {
        let file = CatalogFile {
            specs: self.records.clone(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn records(&self) -> &[SpecRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Normalize every record in list order.
    ///
    /// Fails on the first record that cannot be normalized, and when two
    /// records resolve to the same shortname.
    pub fn normalize_all(&self) -> SpecResult<Vec<NormalizedSpec>> {
        let mut seen = HashSet::new();
        let mut specs = Vec::with_capacity(self.records.len());

        for (index, record) in self.records.iter().enumerate() {
            let spec = normalize(record).map_err(|e| SpecError::InvalidRecord {
                index: index + 1,
                source: Box::new(e),
            })?;
            if !seen.insert(spec.shortname.clone()) {
                return Err(SpecError::DuplicateShortname(spec.shortname));
            }
            specs.push(spec);
        }

        Ok(specs)
    }
}
