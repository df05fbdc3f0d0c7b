//! Tests for tui-alert-demo argument parsing and startup failures.
//!
//! Responsibilities:
//! - Validate --help and --version output.
//! - Verify invalid arguments and appearance files fail before the TUI starts.
//!
//! Invariants:
//! - Tests run with DOTENV_DISABLED=1 to ensure hermetic behavior.
//! - No test reaches the interactive event loop.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn demo_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tui-alert-demo");
    cmd.current_dir(dir)
        .env("DOTENV_DISABLED", "1")
        .env_remove("ALERT_CONFIG_PATH")
        .env_remove("ALERT_THEME")
        .env_remove("ALERT_BACKGROUND_ALPHA");
    cmd
}

#[test]
#[serial]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();
    demo_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--config-path"))
        .stdout(predicate::str::contains("--no-blur"))
        .stdout(predicate::str::contains("--no-mouse"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
#[serial]
fn test_version() {
    let dir = TempDir::new().unwrap();
    demo_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
#[serial]
fn test_unknown_mode_fails() {
    let dir = TempDir::new().unwrap();
    demo_cmd(dir.path())
        .args(["--mode", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
#[serial]
fn test_malformed_appearance_file_fails_before_tui() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("appearance.json");
    fs::write(&config, "{ not json").unwrap();

    demo_cmd(dir.path())
        .arg("--config-path")
        .arg(&config)
        .arg("--log-dir")
        .arg(dir.path().join("logs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
#[serial]
fn test_out_of_range_alpha_fails_before_tui() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("appearance.json");
    fs::write(&config, r#"{ "background_alpha": 2.5 }"#).unwrap();

    demo_cmd(dir.path())
        .arg("--config-path")
        .arg(&config)
        .arg("--log-dir")
        .arg(dir.path().join("logs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("background_alpha"));
}
