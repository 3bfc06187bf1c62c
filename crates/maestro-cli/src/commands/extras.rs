//! `maestro extras` command implementation.

use crate::commands::{ErrorInfo, EXIT_ERROR};
use maestro_core::ComposerProject;
use miette::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Per-package extra metadata for JSON output.
#[derive(Serialize)]
struct ExtrasResult {
    ok: bool,
    extras: BTreeMap<String, Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

pub fn run(cwd: &Path, json: bool) -> Result<()> {
    let extras = ComposerProject::discover(cwd).and_then(|project| project.extras());

    match extras {
        Ok(extras) => {
            if json {
                let result = ExtrasResult {
                    ok: true,
                    extras,
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else if extras.is_empty() {
                println!("no extra metadata found");
            } else {
                for (name, extra) in &extras {
                    println!(
                        "{name} {}",
                        serde_json::to_string(&Value::Object(extra.clone())).unwrap()
                    );
                }
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let result = ExtrasResult {
                    ok: false,
                    extras: BTreeMap::new(),
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
