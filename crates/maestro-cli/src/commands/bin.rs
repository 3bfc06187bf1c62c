//! `maestro bin` command implementation.
//!
//! Locate a vendor binary by name, falling back to the host's lookup
//! command when it is not installed under the project bin dir.

use crate::commands::{ErrorInfo, EXIT_ERROR};
use maestro_core::ComposerProject;
use miette::Result;
use serde::Serialize;
use std::path::Path;

/// Exit code for binary not found.
const EXIT_NOT_FOUND: i32 = 127;

/// Binary lookup result for JSON output.
#[derive(Serialize)]
struct BinResult {
    ok: bool,
    binary: String,
    resolved_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

pub fn run(cwd: &Path, name: &str, json: bool) -> Result<()> {
    let located = ComposerProject::discover(cwd).and_then(|project| project.locate_binary(name));

    match located {
        Ok(path) if !path.is_empty() => {
            if json {
                let result = BinResult {
                    ok: true,
                    binary: name.to_string(),
                    resolved_path: Some(path),
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else {
                println!("{path}");
            }
            Ok(())
        }
        Ok(_) => {
            if json {
                let result = BinResult {
                    ok: false,
                    binary: name.to_string(),
                    resolved_path: None,
                    error: Some(ErrorInfo {
                        code: "BINARY_NOT_FOUND".to_string(),
                        message: format!("Binary '{name}' not found in the vendor bin dir or PATH"),
                    }),
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else {
                eprintln!("error: binary '{name}' not found");
            }
            std::process::exit(EXIT_NOT_FOUND);
        }
        Err(err) => {
            if json {
                let result = BinResult {
                    ok: false,
                    binary: name.to_string(),
                    resolved_path: None,
                    error: Some(ErrorInfo::from(&err)),
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else {
                eprintln!("error: {err}");
            }
            std::process::exit(EXIT_ERROR);
        }
    }
}
