//! Composer project location, path resolution, and derived queries.

use crate::composer::command::{self, CommandArgs, CommandResult};
use crate::composer::installed::{self, InstalledPackage};
use crate::composer::manifest::{self, Manifest, MANIFEST_NAME};
use crate::error::Error;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the composer executable.
const COMPOSER_BIN: &str = "composer";

/// Snapshot location relative to the vendor directory.
const INSTALLED_SNAPSHOT: &str = "composer/installed.json";

/// Facade over one Composer project rooted at a base path.
///
/// Every query reads fresh from disk or drives one blocking `composer`
/// invocation; nothing is cached between calls, and each invocation owns
/// its own capture buffer.
#[derive(Debug, Clone)]
pub struct ComposerProject {
    base_path: PathBuf,
    composer_bin: Option<PathBuf>,
}

impl ComposerProject {
    /// Open a project at an explicit base path.
    ///
    /// Trailing path separators are trimmed. Fails with `FileNotFound`
    /// when the directory has no readable composer.json.
    pub fn new(base_path: impl AsRef<Path>) -> Result<Self, Error> {
        let base = trim_trailing_separators(base_path.as_ref());
        let manifest = base.join(MANIFEST_NAME);
        if !is_readable_file(&manifest) {
            return Err(Error::FileNotFound { path: manifest });
        }
        Ok(Self {
            base_path: base,
            composer_bin: None,
        })
    }

    /// Discover the project root by walking up from `cwd` looking for
    /// composer.json.
    pub fn discover(cwd: &Path) -> Result<Self, Error> {
        let mut current = cwd.to_path_buf();
        loop {
            if current.join(MANIFEST_NAME).is_file() {
                return Self::new(&current);
            }
            if !current.pop() {
                return Err(Error::FileNotFound {
                    path: cwd.join(MANIFEST_NAME),
                });
            }
        }
    }

    /// Override the composer executable used for command invocations.
    #[must_use]
    pub fn with_composer_bin(mut self, bin: impl Into<PathBuf>) -> Self {
        self.composer_bin = Some(bin.into());
        self
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path to the project manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.base_path.join(MANIFEST_NAME)
    }

    /// Read and parse composer.json.
    pub fn manifest(&self) -> Result<Manifest, Error> {
        let path = self.manifest_path();
        tracing::debug!(path = %path.display(), "reading manifest");
        let value = manifest::read_json_file(&path)?;
        Manifest::from_value(value, &path)
    }

    /// Read the installed-packages snapshot under the vendor directory.
    pub fn installed(&self) -> Result<Vec<InstalledPackage>, Error> {
        let path = self.vendor_path()?.join(INSTALLED_SNAPSHOT);
        tracing::debug!(path = %path.display(), "reading installed snapshot");
        let value = manifest::read_json_file(&path)?;
        installed::packages_from_snapshot(value, &path)
    }

    /// Resolved vendor directory: the manifest's `config.vendor-dir`
    /// override when present, else `{base}/vendor`.
    pub fn vendor_path(&self) -> Result<PathBuf, Error> {
        self.resolve_dir(|config| config.vendor_dir.as_deref(), "vendor")
    }

    /// Resolved bin directory: the manifest's `config.bin-dir` override
    /// when present, else `{base}/vendor/bin`.
    pub fn bin_path(&self) -> Result<PathBuf, Error> {
        self.resolve_dir(|config| config.bin_dir.as_deref(), "vendor/bin")
    }

    /// Locate an executable: `{bin}/{name}` when present as a file, else
    /// whatever the host lookup command (`where`/`which`) prints for it.
    ///
    /// The lookup's exit status is deliberately ignored; a missing binary
    /// yields whatever the host command printed, possibly nothing.
    pub fn locate_binary(&self, name: &str) -> Result<String, Error> {
        let candidate = self.bin_path()?.join(name);
        if candidate.is_file() {
            return Ok(candidate.to_string_lossy().into_owned());
        }

        let lookup = if cfg!(windows) { "where" } else { "which" };
        let output = Command::new(lookup).arg(name).output()?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Runtime requirements from the manifest's `require` section.
    pub fn requirements(&self) -> Result<BTreeMap<String, String>, Error> {
        Ok(self.manifest()?.require)
    }

    /// Development requirements from `require-dev`.
    pub fn dev_requirements(&self) -> Result<BTreeMap<String, String>, Error> {
        Ok(self.manifest()?.require_dev)
    }

    /// Merged requirements; dev entries win on duplicate keys.
    pub fn all_requirements(&self) -> Result<BTreeMap<String, String>, Error> {
        Ok(self.manifest()?.all_requirements())
    }

    /// The declared PHP version constraint, if any.
    pub fn php_requirement(&self) -> Result<Option<String>, Error> {
        Ok(self.manifest()?.require.get("php").cloned())
    }

    /// Per-package `extra` metadata from the installed snapshot.
    pub fn extras(&self) -> Result<BTreeMap<String, Map<String, Value>>, Error> {
        Ok(installed::extras(&self.installed()?))
    }

    /// Native-extension constraints declared across installed packages.
    pub fn extension_requirements(&self) -> Result<BTreeMap<String, Vec<String>>, Error> {
        Ok(installed::extension_requirements(&self.installed()?))
    }

    /// Run `composer <name>` with the given arguments, decoding the
    /// final captured output chunk as JSON when the arguments request it.
    pub fn run_command(&self, name: &str, args: &CommandArgs) -> Result<CommandResult, Error> {
        let composer = self.resolve_composer_bin();
        tracing::debug!(composer = %composer.display(), command = name, "invoking composer");
        command::run(&composer, name, args, &self.base_path)
    }

    /// Outdated direct dependencies, as reported by
    /// `composer outdated -n --format json`.
    ///
    /// Returns the report's `installed` entries, or an empty list when
    /// the field is absent.
    pub fn outdated(&self) -> Result<Vec<Value>, Error> {
        let args = CommandArgs::new().flag("-n").option("--format", "json");

        match self.run_command("outdated", &args)? {
            CommandResult::Json(value) => Ok(value
                .get("installed")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default()),
            CommandResult::Text(_) => Ok(Vec::new()),
        }
    }

    /// Resolution order: explicit override, project bin dir, PATH, bare
    /// name (letting the OS report the failure at spawn time).
    fn resolve_composer_bin(&self) -> PathBuf {
        if let Some(bin) = &self.composer_bin {
            return bin.clone();
        }
        if let Ok(bin_dir) = self.bin_path() {
            let local = bin_dir.join(COMPOSER_BIN);
            if local.is_file() {
                return local;
            }
        }
        which::which(COMPOSER_BIN).unwrap_or_else(|_| PathBuf::from(COMPOSER_BIN))
    }

    fn resolve_dir(
        &self,
        pick: impl Fn(&manifest::ManifestConfig) -> Option<&str>,
        default: &str,
    ) -> Result<PathBuf, Error> {
        let manifest = self.manifest();
        if let Ok(manifest) = &manifest {
            if let Some(dir) = pick(&manifest.config) {
                // join() replaces the base when the override is absolute
                return Ok(self.base_path.join(dir));
            }
        }

        let fallback = self.base_path.join(default);
        if manifest.is_err() && !fallback.is_dir() {
            return Err(Error::FileNotFound { path: fallback });
        }
        Ok(fallback)
    }
}

fn trim_trailing_separators(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        path.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && fs::File::open(path).is_ok()
}
