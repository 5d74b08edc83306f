//! Integration tests for peanut-cli
//!
//! These tests verify the CLI commands work end-to-end.
//! Tests run serially and each points PEANUT_CONFIG at its own file.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::{NamedTempFile, TempDir};

/// Write a config file holding the given JSON
fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

/// Get a Command for the peanut binary using `config`
fn peanut(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("peanut").unwrap();
    cmd.env("PEANUT_CONFIG", config.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stats_fixture() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"[
            {"fid": 100, "username": "peanut_fan", "sent": 12, "received": 6,
             "failedAttempts": 2, "lastUpdated": "2025-02-03T04:00:00Z"}
        ]"#,
    )
    .unwrap();
    file
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
#[serial]
fn test_cli_help() {
    let config = config_file("{}");
    peanut(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("peanut"))
        .stdout(predicate::str::contains("COMMAND").or(predicate::str::contains("Commands")));
}

#[test]
#[serial]
fn test_cli_version() {
    let config = config_file("{}");
    peanut(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("peanut"));
}

// =============================================================================
// Reset Command Tests
// =============================================================================

#[test]
#[serial]
fn test_reset_before_boundary() {
    let config = config_file("{}");
    peanut(&config)
        .args(["--now", "2025-02-03T05:22:15Z", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5h 37m"))
        .stdout(predicate::str::contains("2025-02-03 11:00:00 UTC"));
}

#[test]
#[serial]
fn test_reset_at_boundary_rolls_over_json() {
    let config = config_file("{}");
    let output = peanut(&config)
        .args(["--now", "2025-02-03T11:00:00Z", "--format", "json", "reset"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["next_reset"], "2025-02-04T11:00:00Z");
    assert_eq!(json["time_remaining"], "24h 0m");
    assert_eq!(json["time_remaining_secs"], 86400);
}

#[test]
#[serial]
fn test_reset_uses_configured_hour() {
    let config = config_file(r#"{"reset_hour_utc": 0}"#);
    peanut(&config)
        .args(["--now", "2025-02-03T23:30:00Z", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0h 30m"));
}

#[test]
#[serial]
fn test_invalid_now_is_rejected() {
    let config = config_file("{}");
    peanut(&config)
        .args(["--now", "tomorrow", "reset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timestamp"));
}

// =============================================================================
// Stats Command Tests
// =============================================================================

#[test]
#[serial]
fn test_stats_from_file_table() {
    let config = config_file("{}");
    let stats = stats_fixture();
    peanut(&config)
        .args(["--now", "2025-02-03T05:22:15Z", "stats", "100", "--file"])
        .arg(stats.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("peanut_fan"))
        .stdout(predicate::str::contains("12/30 left (5h 37m until reset)"))
        .stdout(predicate::str::contains("https://peanuthub.vercel.app/100"));
}

#[test]
#[serial]
fn test_stats_from_file_json() {
    let config = config_file(r#"{"daily_allowance": 10}"#);
    let stats = stats_fixture();
    let output = peanut(&config)
        .args(["--now", "2025-02-03T05:22:15Z", "--format", "json", "stats", "100", "--file"])
        .arg(stats.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["fid"], 100);
    assert_eq!(json["total_points"], 18);
    assert_eq!(json["consumed"], 10);
    assert_eq!(json["remaining"], 0);
    assert_eq!(json["failed_attempts"], 2);
    assert_eq!(json["days_tracked"], 2);
}

#[test]
#[serial]
fn test_stats_unknown_fid_fails() {
    let config = config_file("{}");
    let stats = stats_fixture();
    peanut(&config)
        .args(["stats", "5", "--file"])
        .arg(stats.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No stats found for fid 5"))
        .stderr(predicate::str::contains("fid 5").count(1));
}

#[test]
#[serial]
fn test_stats_without_source_fails() {
    let config = config_file("{}");
    peanut(&config)
        .args(["stats", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No stats source configured"));
}

#[test]
#[serial]
fn test_stats_random_is_seeded() {
    let config = config_file("{}");
    let run = || {
        peanut(&config)
            .args([
                "--now", "2025-02-03T05:22:15Z", "--format", "json",
                "stats", "7", "--source", "random", "--seed", "42",
            ])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// =============================================================================
// History Command Tests
// =============================================================================

#[test]
#[serial]
fn test_history() {
    let config = config_file("{}");
    peanut(&config)
        .args(["--now", "2025-02-03T00:00:00Z", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking since Feb 1, 2025"))
        .stdout(predicate::str::contains("2 days of 🥜 history"));
}

#[test]
#[serial]
fn test_history_future_start_is_negative() {
    let config = config_file(r#"{"start_date": "2025-02-05"}"#);
    let output = peanut(&config)
        .args(["--now", "2025-02-03T00:00:00Z", "--format", "json", "history"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["days"], -2);
}

// =============================================================================
// Config Command Tests
// =============================================================================

#[test]
#[serial]
fn test_config_show() {
    let config = config_file(r#"{"daily_allowance": 42}"#);
    peanut(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("daily_allowance"))
        .stdout(predicate::str::contains("42"));
}

#[test]
#[serial]
fn test_missing_config_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent").join("config.json");

    Command::cargo_bin("peanut")
        .unwrap()
        .env("PEANUT_CONFIG", &path)
        .args(["--now", "2025-02-03T05:22:15Z", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5h 37m"));

    Command::cargo_bin("peanut")
        .unwrap()
        .env("PEANUT_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("daily_allowance"))
        .stdout(predicate::str::contains("30"));

    assert!(!path.exists());
}

#[test]
#[serial]
fn test_invalid_config_fails() {
    let config = config_file(r#"{"reset_hour_utc": 30}"#);
    peanut(&config)
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reset_hour_utc"));
}

#[test]
#[serial]
fn test_config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    Command::cargo_bin("peanut")
        .unwrap()
        .env("PEANUT_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["reset_hour_utc"], 11);
    assert_eq!(written["daily_allowance"], 30);

    // A second init without --force refuses to overwrite
    Command::cargo_bin("peanut")
        .unwrap()
        .env("PEANUT_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .failure();
}
