//! Binary-level tests for the recompose CLI.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn recompose() -> Command {
    Command::cargo_bin("recompose").unwrap()
}

#[test]
fn test_no_command_shows_hint() {
    recompose()
        .assert()
        .success()
        .stdout(predicate::str::contains("recompose --help"));
}

#[test]
fn test_scan_lists_projects() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "modules/token/token.info.yml",
        "name: Token\nproject: token\nversion: 8.x-1.5\n",
    );

    recompose()
        .args(["scan", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("token"))
        .stdout(predicate::str::contains("1.5.0"));
}

#[test]
fn test_status_reports_unreconciled() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "modules/views/views.info.yml",
        "name: Views\nproject: views\n",
    );

    recompose()
        .args(["status", "--vendor", "vendor", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("vendor/views"));
}

#[test]
fn test_status_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "modules/views/views.info.yml",
        "name: Views\nproject: views\n",
    );
    write(
        temp.path(),
        "composer.json",
        r#"{"require": {"vendor/views": "^3.0"}}"#,
    );

    let output = recompose()
        .args(["status", "--vendor", "vendor", "--json", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["specified"]["vendor/views"], "^3.0");
    assert!(value["unreconciled"].as_object().unwrap().is_empty());
}

#[test]
fn test_status_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    recompose()
        .args(["status", "--root"])
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_prefer_projects_flag() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "modules/a/a.info.yml",
        "name: A\nproject: foo\n",
    );
    write(
        temp.path(),
        "modules/b/b.info.yml",
        "name: B\nproject: foo\n",
    );

    let output = recompose()
        .args([
            "status",
            "--vendor",
            "vendor",
            "--prefer-projects",
            "--json",
            "--root",
        ])
        .arg(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let unreconciled = value["unreconciled"].as_object().unwrap();
    assert_eq!(unreconciled.len(), 1);
    assert_eq!(unreconciled["foo"], "vendor/foo");
}
