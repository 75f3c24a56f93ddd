//! End-to-end tests for the secdoc binary

mod common;

use assert_cmd::Command;
use common::{TestTree, MULTI_BLOCK_GO};
use predicates::str::contains;
use serde_json::Value;
use std::fs;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("secdoc").unwrap();
    cmd.env_remove("SECDOC_OUTPUT")
        .env_remove("SECDOC_LANGS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_writes_report_to_given_path() {
    let tree = TestTree::new().unwrap();
    tree.create_file("payments.go", MULTI_BLOCK_GO).unwrap();
    let output = tree.scratch("report.json");

    cmd()
        .arg(tree.root())
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("Report written to"));

    let report: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["security_controls"].as_array().unwrap().len(), 2);
    assert_eq!(report["requirements"][0]["requirement_id"], "REQ-20");
}

#[test]
fn test_default_output_name_in_working_dir() {
    let tree = TestTree::new().unwrap();
    tree.create_go_block("a.go", &["@security-control SC-1"]).unwrap();
    let workdir = tree.scratch("work");
    fs::create_dir_all(&workdir).unwrap();

    cmd().current_dir(&workdir).arg(tree.root()).assert().success();

    assert!(workdir.join("security-report.json").exists());
}

#[test]
fn test_output_path_from_environment() {
    let tree = TestTree::new().unwrap();
    tree.create_go_block("a.go", &["@requirement REQ-1"]).unwrap();
    let output = tree.scratch("from-env.json");

    cmd().env("SECDOC_OUTPUT", &output).arg(tree.root()).assert().success();

    assert!(output.exists());
}

#[test]
fn test_stdout_mode_prints_json() {
    let tree = TestTree::new().unwrap();
    tree.create_go_block("a.go", &["@security-control SC-7", "@references: NIST SC-7"])
        .unwrap();

    let assert = cmd().arg(tree.root()).arg("--stdout").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["security_controls"][0]["references"], "NIST SC-7");
}

#[test]
fn test_lang_flag_enables_python() {
    let tree = TestTree::new().unwrap();
    tree.create_file("tool.py", "# @security-control SC-PY\nx = 1\n").unwrap();

    let assert = cmd()
        .args(["--lang", "python", "--stdout"])
        .arg(tree.root())
        .assert()
        .success();
    let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(report["security_controls"][0]["control_id"], "SC-PY");
}

#[test]
fn test_unknown_language_is_rejected() {
    let tree = TestTree::new().unwrap();

    cmd()
        .args(["--lang", "cobol"])
        .arg(tree.root())
        .assert()
        .failure()
        .stderr(contains("cobol"));
}

#[test]
fn test_parse_failure_exits_non_zero_without_report() {
    let tree = TestTree::new().unwrap();
    tree.create_file("broken.go", "package p\nfunc {\n").unwrap();
    let output = tree.scratch("report.json");

    cmd()
        .arg(tree.root())
        .arg(&output)
        .assert()
        .code(1)
        .stderr(contains("broken.go"));

    assert!(!output.exists());
}

#[test]
fn test_missing_argument_fails() {
    cmd().assert().failure();
}
