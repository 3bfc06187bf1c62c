//! `maestro php` command implementation.

use crate::commands::{ErrorInfo, EXIT_ERROR};
use maestro_core::ComposerProject;
use miette::Result;
use serde::Serialize;
use std::path::Path;

/// PHP constraint for JSON output.
#[derive(Serialize)]
struct PhpResult {
    ok: bool,
    php: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

pub fn run(cwd: &Path, json: bool) -> Result<()> {
    let php = ComposerProject::discover(cwd).and_then(|project| project.php_requirement());

    match php {
        Ok(php) => {
            if json {
                let result = PhpResult {
                    ok: true,
                    php,
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else {
                match php {
                    Some(constraint) => println!("{constraint}"),
                    None => println!("no php requirement declared"),
                }
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let result = PhpResult {
                    ok: false,
                    php: None,
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
