//! `maestro outdated` command implementation.
//!
//! Delegates the actual outdated detection to `composer outdated`; this
//! command only relays the report.

use crate::commands::{ErrorInfo, EXIT_ERROR};
use maestro_core::ComposerProject;
use miette::Result;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Outdated report for JSON output.
#[derive(Serialize)]
struct OutdatedResult {
    ok: bool,
    installed: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

pub fn run(cwd: &Path, composer: Option<&Path>, json: bool) -> Result<()> {
    let outdated = ComposerProject::discover(cwd).and_then(|project| {
        let project = match composer {
            Some(bin) => project.with_composer_bin(bin),
            None => project,
        };
        project.outdated()
    });

    match outdated {
        Ok(installed) => {
            if json {
                let result = OutdatedResult {
                    ok: true,
                    installed,
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else if installed.is_empty() {
                println!("all packages are up to date");
            } else {
                for package in &installed {
                    let name = package["name"].as_str().unwrap_or("?");
                    let version = package["version"].as_str().unwrap_or("?");
                    let latest = package["latest"].as_str().unwrap_or("?");
                    let status = package["latest-status"].as_str().unwrap_or("");
                    println!("{name} {version} -> {latest} {status}");
                }
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let result = OutdatedResult {
                    ok: false,
                    installed: Vec::new(),
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
