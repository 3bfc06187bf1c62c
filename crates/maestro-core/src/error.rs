use std::path::PathBuf;
use thiserror::Error;

/// Stable error codes for machine-readable output.
pub mod codes {
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
    pub const EMPTY_FILE: &str = "EMPTY_FILE";
    pub const MALFORMED_JSON: &str = "MALFORMED_JSON";
    pub const COMMAND_FAILED: &str = "COMMAND_FAILED";
}

/// Core error type for maestro operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File '{path}' not found or not readable")]
    FileNotFound { path: PathBuf },

    #[error("File '{path}' is empty")]
    EmptyFile { path: PathBuf },

    #[error("Invalid JSON in {origin}: {source}")]
    MalformedJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to run composer {command}: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("composer {command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

impl Error {
    /// Get the stable error code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => codes::IO_ERROR,
            Self::FileNotFound { .. } => codes::FILE_NOT_FOUND,
            Self::EmptyFile { .. } => codes::EMPTY_FILE,
            Self::MalformedJson { .. } => codes::MALFORMED_JSON,
            Self::CommandSpawn { .. } | Self::CommandFailed { .. } => codes::COMMAND_FAILED,
        }
    }
}
