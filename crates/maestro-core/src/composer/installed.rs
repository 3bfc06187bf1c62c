//! Installed-packages snapshot parsing and projections.
//!
//! The snapshot lives at `{vendor}/composer/installed.json`. Composer 2
//! writes an object `{"packages": [...], ...}`; Composer 1 wrote a bare
//! array. Both shapes decode to the same package sequence.

use crate::error::Error;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Prefix marking a native-extension pseudo-dependency.
const EXT_PREFIX: &str = "ext-";

/// One package entry from the installed snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct InstalledPackage {
    pub name: String,

    pub version: String,

    /// Dependency constraints; may contain `ext-*` and `php`
    /// pseudo-packages alongside real package names.
    #[serde(default)]
    pub require: BTreeMap<String, String>,

    /// Package-specific opaque metadata.
    #[serde(default)]
    pub extra: Map<String, Value>,
}

/// Decode an installed snapshot into its package sequence.
pub fn packages_from_snapshot(value: Value, origin: &Path) -> Result<Vec<InstalledPackage>, Error> {
    let packages = match value {
        Value::Object(mut map) => match map.remove("packages") {
            Some(packages) => packages,
            None => Value::Object(map),
        },
        other => other,
    };

    serde_json::from_value(packages).map_err(|source| Error::MalformedJson {
        origin: origin.display().to_string(),
        source,
    })
}

/// Collect `ext-*` constraints across installed packages.
///
/// Constraints are grouped by extension name (with the `ext-` prefix
/// stripped) and deduplicated per extension, keeping first-occurrence
/// order of the remaining entries.
#[must_use]
pub fn extension_requirements(packages: &[InstalledPackage]) -> BTreeMap<String, Vec<String>> {
    let mut extensions: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for package in packages {
        for (name, constraint) in &package.require {
            let Some(ext) = name.strip_prefix(EXT_PREFIX) else {
                continue;
            };
            if ext.is_empty() {
                continue;
            }
            let constraints = extensions.entry(ext.to_string()).or_default();
            if !constraints.contains(constraint) {
                constraints.push(constraint.clone());
            }
        }
    }

    extensions
}

/// Map package name to its `extra` metadata, including only packages
/// where `extra` is present and non-empty.
#[must_use]
pub fn extras(packages: &[InstalledPackage]) -> BTreeMap<String, Map<String, Value>> {
    packages
        .iter()
        .filter(|package| !package.extra.is_empty())
        .map(|package| (package.name.clone(), package.extra.clone()))
        .collect()
}
