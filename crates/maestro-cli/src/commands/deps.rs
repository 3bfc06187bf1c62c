//! `maestro deps` command implementation.

use crate::commands::{ErrorInfo, EXIT_ERROR};
use maestro_core::ComposerProject;
use miette::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Requirements listing for JSON output.
#[derive(Serialize)]
struct DepsResult {
    ok: bool,
    section: &'static str,
    requirements: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

pub fn run(cwd: &Path, dev: bool, all: bool, json: bool) -> Result<()> {
    let section = if all {
        "all"
    } else if dev {
        "require-dev"
    } else {
        "require"
    };

    let requirements = ComposerProject::discover(cwd).and_then(|project| {
        if all {
            project.all_requirements()
        } else if dev {
            project.dev_requirements()
        } else {
            project.requirements()
        }
    });

    match requirements {
        Ok(requirements) => {
            if json {
                let result = DepsResult {
                    ok: true,
                    section,
                    requirements,
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else if requirements.is_empty() {
                println!("no {section} entries declared");
            } else {
                for (name, constraint) in &requirements {
                    println!("{name} {constraint}");
                }
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let result = DepsResult {
                    ok: false,
                    section,
                    requirements: BTreeMap::new(),
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
