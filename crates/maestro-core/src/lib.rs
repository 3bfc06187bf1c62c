#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod composer;
pub mod config;
pub mod error;
pub mod version;

pub use composer::{
    extension_requirements, extras, read_json_file, CaptureBuffer, CommandArgs, CommandResult,
    ComposerProject, InstalledPackage, Manifest, OutputSink,
};
pub use config::Config;
pub use error::Error;
pub use version::VERSION;
