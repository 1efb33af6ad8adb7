//! Integration tests for the CLI types subcommand

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_types_list_command() {
    let mut cmd = Command::cargo_bin("frontgen").unwrap();

    cmd.arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available element types"))
        .stdout(predicate::str::contains("component (component, c)"))
        .stdout(predicate::str::contains("reducer (reducer, r)"))
        .stdout(predicate::str::contains("action (action, a)"))
        .stdout(predicate::str::contains("src/components/%s"))
        .stdout(predicate::str::contains("- %sContainer.js"));
}

#[test]
fn test_types_json_command() {
    let mut cmd = Command::cargo_bin("frontgen").unwrap();

    let output = cmd.args(["types", "--json"]).output().unwrap();
    assert!(output.status.success());

    let types: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let types = types.as_array().unwrap();
    assert_eq!(types.len(), 3);
    assert_eq!(types[0]["kind"], "component");
    assert_eq!(types[0]["capitalize"], true);
    assert_eq!(types[1]["root_dir"], "src/redux/reducers/%s");
    assert_eq!(types[2]["files"].as_array().unwrap().len(), 2);
}
