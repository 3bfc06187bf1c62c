//! `maestro extensions` command implementation.

use crate::commands::{ErrorInfo, EXIT_ERROR};
use maestro_core::ComposerProject;
use miette::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Extension constraints for JSON output.
#[derive(Serialize)]
struct ExtensionsResult {
    ok: bool,
    extensions: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

pub fn run(cwd: &Path, json: bool) -> Result<()> {
    let extensions =
        ComposerProject::discover(cwd).and_then(|project| project.extension_requirements());

    match extensions {
        Ok(extensions) => {
            if json {
                let result = ExtensionsResult {
                    ok: true,
                    extensions,
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else if extensions.is_empty() {
                println!("no extension requirements found");
            } else {
                for (name, constraints) in &extensions {
                    println!("ext-{name} {}", constraints.join(", "));
                }
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let result = ExtensionsResult {
                    ok: false,
                    extensions: BTreeMap::new(),
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
