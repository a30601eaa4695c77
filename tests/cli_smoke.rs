#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly, responds to
//! basic commands, and fails with the documented exit codes before any
//! network call is made.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn storenotes(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("storenotes").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("OPENAI_API_KEY");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("app store notes"))
        .stdout(predicate::str::contains("--languages"))
        .stdout(predicate::str::contains("--max-length"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("release"))
        .stdout(predicate::str::contains("action"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("sv"))
        .stdout(predicate::str::contains("Swedish"))
        .stdout(predicate::str::contains("pt-br"));
}

#[test]
fn test_providers_lists_builtin_openai() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("openai"))
        .stdout(predicate::str::contains("https://api.openai.com"));
}

#[test]
fn test_providers_unknown_name() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .args(["providers", "nonexistent_provider_xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current defaults"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_missing_api_key_is_config_error() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .write_stdin("- Fixed crash on launch\n")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_zero_max_length_is_config_error() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .env("OPENAI_API_KEY", "sk-test")
        .args(["--max-length", "0"])
        .write_stdin("- Fixed crash on launch\n")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("max_length"));
}

#[test]
fn test_release_rejects_malformed_repo() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .args(["release", "--repo", "not-a-repo"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("owner/repo"));
}

#[test]
fn test_action_without_inputs_reports_annotation() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .arg("action")
        .env_remove("INPUT_GITHUB_TOKEN")
        .env_remove("INPUT_OPENAI_API_KEY")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "::error::Action failed with error: Input required and not supplied: github_token",
        ));
}

#[test]
fn test_action_without_repository() {
    let home = TempDir::new().unwrap();
    storenotes(&home)
        .arg("action")
        .env("INPUT_GITHUB_TOKEN", "ghs_test")
        .env("INPUT_OPENAI_API_KEY", "sk-test")
        .env_remove("GITHUB_REPOSITORY")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("GITHUB_REPOSITORY"));
}
