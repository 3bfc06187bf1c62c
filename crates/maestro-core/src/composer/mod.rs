//! Composer project facade.
//!
//! Provides utilities for:
//! - Locating a project's composer.json (explicit path or walk-up discovery)
//! - Reading the manifest and the installed-packages snapshot
//! - Resolving vendor/bin directories and vendor binaries
//! - Driving the composer binary and capturing its output in memory
//! - Derived dependency queries (requirements, extensions, extras, outdated)
//!
//! All real dependency-management computation (resolution, version
//! comparison, outdated detection) stays inside Composer itself; this
//! module only reads its files and its command output.

pub mod command;
pub mod installed;
pub mod manifest;
pub mod output;
pub mod project;

pub use command::{CommandArgs, CommandResult};
pub use installed::{extension_requirements, extras, InstalledPackage};
pub use manifest::{read_json_file, Manifest, ManifestConfig, MANIFEST_NAME};
pub use output::{CaptureBuffer, OutputSink};
pub use project::ComposerProject;
