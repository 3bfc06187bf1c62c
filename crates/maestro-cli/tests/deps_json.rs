//! Integration tests for `maestro deps --json` and `maestro php --json`.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "-p", "maestro-cli", "--bin", "maestro", "--"]);
    cmd
}

fn write_manifest(dir: &Path, content: &str) {
    fs::write(dir.join("composer.json"), content).unwrap();
}

const MANIFEST: &str = r#"{
    "require": {"php": "^8.1", "vendor/pkg": "^2.0", "shared/pkg": "^1.0"},
    "require-dev": {"phpunit/phpunit": "^9.0", "shared/pkg": "^2.0"}
}"#;

#[test]
fn test_deps_json_runtime_section() {
    let dir = tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);

    let output = cargo_bin()
        .args(["--json", "--cwd", dir.path().to_str().unwrap(), "deps"])
        .output()
        .expect("Failed to run deps command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    assert_eq!(json["ok"], true);
    assert_eq!(json["section"], "require");
    let requirements = json["requirements"].as_object().unwrap();
    assert_eq!(requirements.len(), 3);
    assert_eq!(requirements["php"], "^8.1");
    assert!(!requirements.contains_key("phpunit/phpunit"));
}

#[test]
fn test_deps_json_all_merges_with_dev_winning() {
    let dir = tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);

    let output = cargo_bin()
        .args([
            "--json",
            "--cwd",
            dir.path().to_str().unwrap(),
            "deps",
            "--all",
        ])
        .output()
        .expect("Failed to run deps command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(json["section"], "all");
    let requirements = json["requirements"].as_object().unwrap();
    assert_eq!(requirements.len(), 4);
    assert_eq!(requirements["shared/pkg"], "^2.0");
    assert_eq!(requirements["phpunit/phpunit"], "^9.0");
}

#[test]
fn test_deps_json_missing_manifest_reports_error() {
    let dir = tempdir().unwrap();

    let output = cargo_bin()
        .args(["--json", "--cwd", dir.path().to_str().unwrap(), "deps"])
        .output()
        .expect("Failed to run deps command");

    assert!(!output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "FILE_NOT_FOUND");
}

#[test]
fn test_deps_human_output_not_json() {
    let dir = tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);

    let output = cargo_bin()
        .args(["--cwd", dir.path().to_str().unwrap(), "deps"])
        .output()
        .expect("Failed to run deps command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        serde_json::from_str::<serde_json::Value>(&stdout).is_err(),
        "Human output should not be valid JSON"
    );
    assert!(stdout.contains("vendor/pkg"));
}

#[test]
fn test_php_json_reports_constraint() {
    let dir = tempdir().unwrap();
    write_manifest(dir.path(), MANIFEST);

    let output = cargo_bin()
        .args(["--json", "--cwd", dir.path().to_str().unwrap(), "php"])
        .output()
        .expect("Failed to run php command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(json["ok"], true);
    assert_eq!(json["php"], "^8.1");
}

#[test]
fn test_php_json_absent_constraint_is_null() {
    let dir = tempdir().unwrap();
    write_manifest(dir.path(), r#"{"require": {"vendor/pkg": "^2.0"}}"#);

    let output = cargo_bin()
        .args(["--json", "--cwd", dir.path().to_str().unwrap(), "php"])
        .output()
        .expect("Failed to run php command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(json["ok"], true);
    assert!(json["php"].is_null());
}
