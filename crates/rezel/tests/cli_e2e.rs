#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rezel_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("rezel"));
    cmd.env_remove("REZEL_CONTAINER_KIND");
    cmd
}

#[test]
fn test_resolve_columns() {
    rezel_cmd()
        .args(["resolve", "col=12 6 4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("col-small-12"))
        .stdout(predicate::str::contains("col-medium-6"))
        .stdout(predicate::str::contains("col-large-4"))
        .stdout(predicate::str::contains("data-col-large = 4"))
        .stdout(predicate::str::contains("col-xlarge").not());
}

#[test]
fn test_resolve_json_output() {
    let output = rezel_cmd()
        .args(["resolve", "--format", "json", "display=flex none"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["classes"][0], "display-small-flex");
    assert_eq!(value["classes"][1], "display-medium-none");
    assert_eq!(value["host_css"].as_array().unwrap().len(), 4);
    assert_eq!(value["container_class"], "grid-element display-small-flex display-medium-none");
}

#[test]
fn test_resolve_structure_flags() {
    rezel_cmd()
        .args(["resolve", "--parent", "r-grid", "--child", "r-grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-row = row"))
        .stdout(predicate::str::contains("data-cell = cell"))
        .stdout(predicate::str::contains("grid-element row cell"));
}

#[test]
fn test_resolve_compact_naming() {
    rezel_cmd()
        .args([
            "resolve",
            "--kind",
            "element",
            "--naming",
            "compact",
            "margin-top=small large",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("r-mt1 = small"))
        .stdout(predicate::str::contains("r-mt2 = large"));
}

#[test]
fn test_unobserved_attribute_warns() {
    rezel_cmd()
        .args(["resolve", "--kind", "element", "col=12"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring attribute"))
        .stdout(predicate::str::contains("col-small").not());
}

#[test]
fn test_malformed_assignment_fails() {
    rezel_cmd()
        .args(["resolve", "=12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid assignment"));
}

#[test]
fn test_config_file_selects_naming() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("rezel.toml");
    fs::write(&config, "host_naming = \"compact\"\ncontainer_kind = \"x-grid\"\n").unwrap();

    rezel_cmd()
        .args(["--config", config.to_str().unwrap()])
        .args(["resolve", "--parent", "x-grid", "col=6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r-c1 = 6"))
        .stdout(predicate::str::contains("r-cell = cell"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.toml");

    rezel_cmd()
        .args(["--config", missing.to_str().unwrap(), "keys"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_keys_lists_registry() {
    rezel_cmd()
        .args(["keys", "--kind", "grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grid (r-grid)"))
        .stdout(predicate::str::contains("text-align"))
        .stdout(predicate::str::contains("flag (presence only)"));
}

#[test]
fn test_verbose_logs_container_kind() {
    rezel_cmd()
        .env("REZEL_CONTAINER_KIND", "x-layout")
        .args(["-v", "resolve", "--parent", "x-layout", "col=6"])
        .assert()
        .success()
        .stderr(predicate::str::contains("host connected"))
        .stderr(predicate::str::contains("x-layout"))
        .stdout(predicate::str::contains("data-cell = cell"));
}

#[test]
fn test_kind_accepts_tag_and_rejects_unknown() {
    rezel_cmd()
        .args(["keys", "--kind", "r-elm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("element (r-elm)"));

    rezel_cmd()
        .args(["keys", "--kind", "table"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown registry: table"));
}

#[test]
fn test_resolve_skip_columns() {
    rezel_cmd()
        .args(["resolve", "skip-before=2 1", "skip-after=0 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skip-before-small-2"))
        .stdout(predicate::str::contains("skip-after-medium-3"))
        .stdout(predicate::str::contains("skip-after-small").not());
}
