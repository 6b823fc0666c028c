//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! points HABITCLOCK_CONFIG_DIR at its own temp directory so nothing
//! touches the real config.

use std::process::Command;

/// Run a CLI command against an isolated config dir and return output.
fn run_cli(config_dir: &std::path::Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "habitclock-cli", "--"])
        .args(args)
        .env("HABITCLOCK_CONFIG_DIR", config_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_habits_lists_both_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["habits"]);
    assert_eq!(code, 0, "habits failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("habits output not JSON");
    let profiles = parsed.as_array().expect("expected JSON array");
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0]["kind"], "sitting");
    assert_eq!(profiles[1]["kind"], "eating");
    assert_eq!(profiles[1]["max_secs"], 1200);
    assert_eq!(profiles[0]["accent_color"], "#1d3557");
    assert_eq!(profiles[1]["accent_color"], "#ff8585");
}

#[test]
fn test_status_snapshot_is_idle_and_zeroed() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["status", "--habit", "eating"]);
    assert_eq!(code, 0, "status failed");
    assert!(stdout.contains("\"type\": \"StateSnapshot\""));
    assert!(stdout.contains("\"running\": false"));
    assert!(stdout.contains("\"display\": \"00 : 00 : 00\""));
}

#[test]
fn test_status_rejects_unknown_habit() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["status", "--habit", "sleeping"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown habit"));
}

#[test]
fn test_run_to_cap_prints_advisory() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["run", "--habit", "sitting", "--max-secs", "2"]);
    assert_eq!(code, 0, "run failed");
    assert!(stdout.contains("Time to stand!"));
}

#[test]
fn test_bounded_eating_run_is_too_fast() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["run", "--habit", "eating", "--ticks", "1"],
    );
    assert_eq!(code, 0, "bounded run failed");
    assert!(stdout.contains("You need to eat slower!"));
}

#[test]
fn test_run_emits_json_events() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["run", "--habit", "sitting", "--max-secs", "2", "--json"],
    );
    assert_eq!(code, 0, "json run failed");
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert!(lines.len() >= 3, "expected start + ticks, got: {stdout}");
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["type"], "TimerStarted");
    let last: serde_json::Value = serde_json::from_str(lines[lines.len() - 1]).unwrap();
    assert_eq!(last["type"], "CapReached");
}

#[test]
fn test_run_rejects_zero_cap() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["run", "--max-secs", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("positive"));
}

#[test]
fn test_config_set_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "sitting.max_secs", "90"]);
    assert_eq!(code, 0, "config set failed");

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "sitting.max_secs"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "90");

    let (stdout, _, code) = run_cli(dir.path(), &["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["sitting"]["max_secs"], 90);
}

#[test]
fn test_config_reset_restores_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let _ = run_cli(dir.path(), &["config", "set", "eating.max_secs", "60"]);
    let (_, _, code) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0, "config reset failed");

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "eating.max_secs"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1200");
}
