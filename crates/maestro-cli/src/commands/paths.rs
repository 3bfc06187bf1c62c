//! `maestro paths` command implementation.

use crate::commands::{ErrorInfo, EXIT_ERROR};
use maestro_core::ComposerProject;
use miette::Result;
use serde::Serialize;
use std::path::Path;

/// Resolved project paths for JSON output.
#[derive(Serialize)]
struct PathsResult {
    ok: bool,
    base: Option<String>,
    vendor: Option<String>,
    bin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

pub fn run(cwd: &Path, json: bool) -> Result<()> {
    let resolved = ComposerProject::discover(cwd).and_then(|project| {
        let base = project.base_path().to_path_buf();
        let vendor = project.vendor_path()?;
        let bin = project.bin_path()?;
        Ok((base, vendor, bin))
    });

    match resolved {
        Ok((base, vendor, bin)) => {
            if json {
                let result = PathsResult {
                    ok: true,
                    base: Some(base.display().to_string()),
                    vendor: Some(vendor.display().to_string()),
                    bin: Some(bin.display().to_string()),
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap());
            } else {
                println!("base:   {}", base.display());
                println!("vendor: {}", vendor.display());
                println!("bin:    {}", bin.display());
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let result = PathsResult {
                    ok: false,
                    base: None,
                    vendor: None,
                    bin: None,
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
