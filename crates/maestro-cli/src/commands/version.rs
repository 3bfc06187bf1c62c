//! `maestro version` command implementation.

use maestro_core::version::{version_string, VERSION};
use miette::Result;
use serde::Serialize;

/// Version info for JSON output.
#[derive(Serialize)]
struct VersionResult {
    ok: bool,
    version: &'static str,
}

pub fn run(json: bool) -> Result<()> {
    if json {
        let result = VersionResult {
            ok: true,
            version: VERSION,
        };
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else {
        println!("{}", version_string());
    }
    Ok(())
}
