//! Integration tests for the CLI commands

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version_command() {
    let mut cmd = cargo_bin_cmd!("ewscan");
    cmd.arg("version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("ewscan "));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("ewscan");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("ewscan "));
}

#[test]
fn test_version_short_flag() {
    let mut cmd = cargo_bin_cmd!("ewscan");
    cmd.arg("-V");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("ewscan "));
}

#[test]
fn test_analyze_without_image_makes_no_request() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.md");

    let mut cmd = cargo_bin_cmd!("ewscan");
    // port 1 refuses connections; the missing-file error must win before
    // any request is attempted
    cmd.arg("analyze")
        .arg("missing.png")
        .arg("-o")
        .arg(&report)
        .args(["--api-base", "http://127.0.0.1:1", "--quiet"])
        .current_dir(dir.path());

    cmd.assert().failure().stderr(predicate::str::contains(
        "Please select or drop an image first to analyze",
    ));

    let report_text = std::fs::read_to_string(&report).unwrap();
    assert!(report_text.contains("**Error:**"));
    assert!(!report_text.contains("Failed to connect"));
}

#[test]
fn test_analyze_rejects_bad_canvas_size() {
    let mut cmd = cargo_bin_cmd!("ewscan");
    cmd.args([
        "analyze",
        "whatever.png",
        "--canvas-size",
        "huge",
        "--quiet",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid size format"));
}

#[test]
fn test_hazards_unreachable_backend() {
    let mut cmd = cargo_bin_cmd!("ewscan");
    cmd.args(["hazards", "battery", "--api-base", "http://127.0.0.1:1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("connection failed"));
}

#[test]
fn test_health_unreachable_backend() {
    let mut cmd = cargo_bin_cmd!("ewscan");
    cmd.args(["health", "--api-base", "http://127.0.0.1:1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not reachable"));
}
