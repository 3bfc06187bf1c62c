//! Subcommand implementations.

pub mod bin;
pub mod deps;
pub mod extensions;
pub mod extras;
pub mod outdated;
pub mod paths;
pub mod php;
pub mod version;

use maestro_core::Error;
use serde::Serialize;

/// Exit code for operation failures.
pub(crate) const EXIT_ERROR: i32 = 1;

/// Error info for JSON output.
#[derive(Serialize)]
pub(crate) struct ErrorInfo {
    pub code: String,
    pub message: String,
}

impl From<&Error> for ErrorInfo {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}
