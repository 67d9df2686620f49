//! Integration tests for `fern compare`.

mod common;

use common::{fern_cmd, write_env};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_compare_identical_environments() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), "dev", r#"{"A":1}"#);
    write_env(temp_dir.path(), "prod", r#"{"A":1}"#);

    fern_cmd(temp_dir.path())
        .args(["--quiet", "compare", "--env1", "dev", "--env2", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No differences found between environments 'dev' and 'prod'",
        ));
}

#[test]
fn test_compare_reports_each_difference() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), "dev", r#"{"A":1,"B":2}"#);
    write_env(temp_dir.path(), "prod", r#"{"A":1,"C":3}"#);

    fern_cmd(temp_dir.path())
        .args(["--quiet", "compare", "--env1", "dev", "--env2", "prod"])
        .assert()
        .success()
        .stdout(
            "Differences between environments 'dev' and 'prod':\n\
             \n\
             Key: B\n- dev: 2\n- prod: Not set\n\
             \n\
             Key: C\n- dev: Not set\n- prod: 3\n",
        );
}

#[test]
fn test_compare_ignores_ciphertext_differences() {
    let temp_dir = TempDir::new().unwrap();

    for env in ["dev", "prod"] {
        fern_cmd(temp_dir.path())
            .args([
                "add", "--key", "Db:Password", "--value", "same", "--env", env, "--encrypted",
            ])
            .assert()
            .success();
    }

    fern_cmd(temp_dir.path())
        .args(["--quiet", "compare", "--env1", "dev", "--env2", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences found"));
}

#[test]
fn test_compare_json_output() {
    let temp_dir = TempDir::new().unwrap();
    write_env(temp_dir.path(), "dev", r#"{"Flag":true}"#);

    let output = fern_cmd(temp_dir.path())
        .args([
            "--quiet", "compare", "--env1", "dev", "--env2", "prod", "--output", "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed["differences"],
        serde_json::json!([{"key": "Flag", "values": {"dev": true, "prod": "Not set"}}])
    );
}
