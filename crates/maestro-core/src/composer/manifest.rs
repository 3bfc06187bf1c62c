//! composer.json reading and parsing.
//!
//! Provides the JSON file-reading contract shared by the manifest and the
//! installed snapshot, plus the typed manifest model.

use crate::error::Error;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Manifest filename at the project root.
pub const MANIFEST_NAME: &str = "composer.json";

/// Parsed composer.json, limited to the fields the facade consumes.
/// Unknown keys are ignored; Composer owns the full schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Runtime requirements (package name -> version constraint).
    #[serde(default)]
    pub require: BTreeMap<String, String>,

    /// Development requirements.
    #[serde(default, rename = "require-dev")]
    pub require_dev: BTreeMap<String, String>,

    /// Path overrides under the manifest's `config` key.
    #[serde(default)]
    pub config: ManifestConfig,
}

/// The subset of the manifest's `config` section consumed by maestro.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestConfig {
    #[serde(rename = "vendor-dir")]
    pub vendor_dir: Option<String>,

    #[serde(rename = "bin-dir")]
    pub bin_dir: Option<String>,
}

impl Manifest {
    /// Decode a manifest from a JSON value read off disk.
    pub fn from_value(value: Value, origin: &Path) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(|source| Error::MalformedJson {
            origin: origin.display().to_string(),
            source,
        })
    }

    /// Merge runtime and dev requirements. Merge order is runtime-first,
    /// dev-second, so dev entries win on duplicate keys.
    #[must_use]
    pub fn all_requirements(&self) -> BTreeMap<String, String> {
        let mut merged = self.require.clone();
        merged.extend(
            self.require_dev
                .iter()
                .map(|(name, constraint)| (name.clone(), constraint.clone())),
        );
        merged
    }

    /// The declared PHP version constraint, if any.
    #[must_use]
    pub fn php_requirement(&self) -> Option<&str> {
        self.require.get("php").map(String::as_str)
    }
}

/// Read a file and decode it as JSON.
///
/// # Errors
/// `FileNotFound` when the path is missing or unreadable, `EmptyFile`
/// when the file has zero-length content, `MalformedJson` when the
/// content is not valid JSON.
pub fn read_json_file(path: &Path) -> Result<Value, Error> {
    let raw = fs::read_to_string(path).map_err(|_| Error::FileNotFound {
        path: path.to_path_buf(),
    })?;

    if raw.is_empty() {
        return Err(Error::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    serde_json::from_str(&raw).map_err(|source| Error::MalformedJson {
        origin: path.display().to_string(),
        source,
    })
}
