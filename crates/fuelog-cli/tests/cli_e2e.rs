#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fuelog_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("fuelog"));
    cmd.env("FUELOG_HOME", home.path().as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add(home: &TempDir, start: Option<&str>, end: &str) -> assert_cmd::assert::Assert {
    let mut cmd = fuelog_cmd(home);
    cmd.args(["add", "--brand", "Shell", "--amount", "71.75", "--litres", "35"]);
    if let Some(start) = start {
        cmd.args(["--start", start]);
    }
    cmd.args(["--end", end]).assert()
}

#[test]
fn test_empty_log_lists_nothing() {
    let home = TempDir::new().unwrap();
    fuelog_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn test_add_shows_derived_metrics() {
    let home = TempDir::new().unwrap();
    add(&home, Some("50000"), "50450")
        .success()
        .stdout(predicate::str::contains("450.0 km"))
        .stdout(predicate::str::contains("12.86 km/L"))
        .stdout(predicate::str::contains("6.27 km/RM"))
        .stdout(predicate::str::contains("Entry added"));

    assert!(home.path().join("logs.json").exists());

    fuelog_cmd(&home)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shell"))
        .stdout(predicate::str::contains("  1. "));
}

#[test]
fn test_add_continues_from_last_odometer() {
    let home = TempDir::new().unwrap();
    add(&home, None, "300").success();
    add(&home, None, "650")
        .success()
        .stdout(predicate::str::contains("350.0 km"));
}

#[test]
fn test_invalid_entry_fails_and_writes_nothing() {
    let home = TempDir::new().unwrap();
    add(&home, Some("50000"), "49000")
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("greater than start"));

    assert!(!home.path().join("logs.json").exists());
}

#[test]
fn test_metrics_preview_does_not_save() {
    let home = TempDir::new().unwrap();
    fuelog_cmd(&home)
        .args([
            "metrics", "--start", "100", "--end", "250", "--litres", "10", "--amount", "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("150.0 km"))
        .stdout(predicate::str::contains("15.00 km/L"))
        .stdout(predicate::str::contains("5.00 km/RM"));

    assert!(!home.path().join("logs.json").exists());
}

#[test]
fn test_sample_then_summary() {
    let home = TempDir::new().unwrap();
    fuelog_cmd(&home)
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 5 sample entries"))
        .stdout(predicate::str::contains("Petronas"));

    fuelog_cmd(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries"))
        .stdout(predicate::str::contains("Efficiency trend"));
}

#[test]
fn test_delete_by_index_and_unknown() {
    let home = TempDir::new().unwrap();
    add(&home, Some("0"), "100").success();
    add(&home, None, "200").success();

    fuelog_cmd(&home)
        .args(["rm", "1", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry deleted (1)"))
        .stdout(predicate::str::contains("No entry matches 9"));

    fuelog_cmd(&home)
        .args(["delete", "5-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start is after end"));
}

#[test]
fn test_reset_clears_log() {
    let home = TempDir::new().unwrap();
    fuelog_cmd(&home).arg("sample").assert().success();

    fuelog_cmd(&home)
        .args(["reset", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 5 entries"));

    fuelog_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn test_mirror_settings() {
    let home = TempDir::new().unwrap();
    fuelog_cmd(&home)
        .arg("mirror")
        .assert()
        .success()
        .stdout(predicate::str::contains("mirroring = disabled"));

    fuelog_cmd(&home)
        .args(["mirror", "enable", "https://script.example/exec"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mirroring = enabled"))
        .stdout(predicate::str::contains("https://script.example/exec"));

    let raw = fs::read_to_string(home.path().join("settings.json")).unwrap();
    assert!(raw.contains("\"remoteMirroringEnabled\": true"));

    fuelog_cmd(&home)
        .args(["mirror", "enable", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid endpoint URL"));
}

#[test]
fn test_unreachable_mirror_does_not_fail_add() {
    let home = TempDir::new().unwrap();
    fuelog_cmd(&home)
        .args(["config", "mirror-timeout", "2"])
        .assert()
        .success();
    // Port 9 (discard) is closed on test machines, so the request fails fast
    fuelog_cmd(&home)
        .args(["mirror", "enable", "http://127.0.0.1:9/exec"])
        .assert()
        .success();

    add(&home, Some("0"), "420").success();

    fuelog_cmd(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("420.0 km"));
}

#[test]
fn test_config_currency() {
    let home = TempDir::new().unwrap();
    fuelog_cmd(&home)
        .args(["config", "currency", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("currency set to EUR"));

    add(&home, Some("0"), "450")
        .success()
        .stdout(predicate::str::contains("km/EUR"));

    fuelog_cmd(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("currency = EUR"))
        .stdout(predicate::str::contains("mirror-timeout = 10"));
}

#[test]
fn test_config_errors_exit_nonzero() {
    let home = TempDir::new().unwrap();
    fuelog_cmd(&home)
        .args(["config", "bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key: bogus"));

    fuelog_cmd(&home)
        .args(["config", "mirror-timeout", "soon"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("whole seconds"));

    assert!(!home.path().join("config.json").exists());
}

#[test]
fn test_data_flag_overrides_env() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();

    fuelog_cmd(&home)
        .args(["--data", other.path().to_str().unwrap(), "sample"])
        .assert()
        .success();

    assert!(other.path().join("logs.json").exists());
    assert!(!home.path().join("logs.json").exists());
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    fuelog_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fuelog 0.3.0"));
}
