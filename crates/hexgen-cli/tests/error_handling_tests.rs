//! Tests for error handling, exit codes and suggestions.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hexgen() -> Command {
    let mut cmd = Command::cargo_bin("hexgen").unwrap();
    cmd.env_remove("HEXGEN_BUILTIN_ROOT");
    cmd
}

#[test]
fn test_invalid_model_name_suggests_fix() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .args(["crud", "user-account", "--target", temp.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not valid"))
        .stderr(predicate::str::contains("user_account"));

    // Validation fires before any filesystem work.
    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn test_unknown_action_lists_known_actions() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .args([
            "crud",
            "Order",
            "--actions",
            "archive",
            "--target",
            temp.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown action 'archive'"))
        .stderr(predicate::str::contains("retrieve"));
}

#[test]
fn test_unknown_builtin_app_lists_available() {
    let temp = TempDir::new().unwrap();
    let builtin = TempDir::new().unwrap();

    hexgen()
        .args([
            "builtin",
            "blog",
            "--target",
            temp.path().to_str().unwrap(),
            "--builtin-root",
            builtin.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid built-in app 'blog'"))
        .stderr(predicate::str::contains("smtp"));

    // Rejected before touching the target.
    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn test_missing_builtin_root_reports_configuration_error() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .args(["crud", "Order", "--target", temp.path().to_str().unwrap()])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Built-in apps directory not found"))
        .stderr(predicate::str::contains("HEXGEN_BUILTIN_ROOT"));
}

#[test]
fn test_builtin_root_without_requested_app_tree() {
    let target = TempDir::new().unwrap();
    let builtin = TempDir::new().unwrap();

    hexgen()
        .args([
            "builtin",
            "user",
            "--target",
            target.path().to_str().unwrap(),
            "--builtin-root",
            builtin.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_unreadable_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("hexgen.toml");
    fs::write(&config, "generation = \"not a table\"").unwrap();

    hexgen()
        .args([
            "crud",
            "Order",
            "--config",
            config.to_str().unwrap(),
            "--target",
            temp.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_subcommand_fails() {
    hexgen().arg("frobnicate").assert().failure().code(1);
}

#[test]
fn test_no_color_error_output_has_no_ansi_codes() {
    let temp = TempDir::new().unwrap();

    hexgen()
        .args([
            "crud",
            "user-account",
            "--no-color",
            "--target",
            temp.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains('\u{1b}').not())
        .stderr(predicate::str::contains("Suggestions:"));
}
