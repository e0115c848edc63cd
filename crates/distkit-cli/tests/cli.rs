//! Tests of the `distkit` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn distkit() -> Command {
    let mut cmd = Command::cargo_bin("distkit").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    distkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_schema_prints_json() {
    let output = distkit().arg("schema").assert().success().get_output().clone();
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema["properties"]["npmDir"].is_object());
}

#[test]
fn test_check_fails_on_empty_project() {
    let temp = TempDir::new().unwrap();
    distkit()
        .args(["check", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("mod.js"))
        .stderr(predicate::str::contains("check(s) failed"));
}

#[test]
fn test_build_rejects_invalid_name() {
    distkit()
        .args(["build", "--name", "tiny-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Global name"));
}

#[test]
fn test_build_reports_missing_entry() {
    let temp = TempDir::new().unwrap();
    distkit()
        .args(["build", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry point not found"));
}

#[test]
fn test_bad_config_file_reports_hint() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("distkit.config.json"), r#"{ "minify": "terser" }"#).unwrap();
    distkit()
        .args(["check", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("distkit schema"));
}
