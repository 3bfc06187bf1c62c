//! Integration tests for `maestro paths --json` and `maestro version`.

use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "-p", "maestro-cli", "--bin", "maestro", "--"]);
    cmd
}

#[test]
fn test_paths_json_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("composer.json"), "{}").unwrap();

    let output = cargo_bin()
        .args(["--json", "--cwd", dir.path().to_str().unwrap(), "paths"])
        .output()
        .expect("Failed to run paths command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(json["ok"], true);
    let vendor = json["vendor"].as_str().unwrap();
    let bin = json["bin"].as_str().unwrap();
    assert!(vendor.ends_with("vendor"));
    assert!(bin.ends_with("vendor/bin"));
}

#[test]
fn test_paths_json_honors_vendor_dir_override() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("composer.json"),
        r#"{"config": {"vendor-dir": "lib", "bin-dir": "lib/bin"}}"#,
    )
    .unwrap();

    let output = cargo_bin()
        .args(["--json", "--cwd", dir.path().to_str().unwrap(), "paths"])
        .output()
        .expect("Failed to run paths command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert!(json["vendor"].as_str().unwrap().ends_with("lib"));
    assert!(json["bin"].as_str().unwrap().ends_with("lib/bin"));
}

#[test]
fn test_version_json_has_version_field() {
    let output = cargo_bin()
        .args(["--json", "version"])
        .output()
        .expect("Failed to run version command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(json["ok"], true);
    assert!(!json["version"].as_str().unwrap().is_empty());
}

#[test]
fn test_version_human_output() {
    let output = cargo_bin()
        .arg("version")
        .output()
        .expect("Failed to run version command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("maestro "));
}
