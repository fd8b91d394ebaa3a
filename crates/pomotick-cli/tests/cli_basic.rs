//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(config_dir: &Path, args: &[&str]) -> (i32, String, String) {
    run_cli_with_stdin(config_dir, args, "")
}

fn run_cli_with_stdin(
    config_dir: &Path,
    args: &[&str],
    stdin: impl AsRef<[u8]>,
) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pomotick"))
        .args(args)
        .env("POMOTICK_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_ref())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait for CLI");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("line is JSON"))
        .collect()
}

#[test]
fn test_simulate_full_focus_interval() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["simulate", "--start", "--ticks", "1501", "--json"],
    );
    assert_eq!(code, 0);

    let lines = json_lines(&stdout);
    assert_eq!(lines[0]["type"], "timer_started");
    assert_eq!(lines[1]["type"], "interval_completed");
    assert_eq!(lines[1]["next"], "short_break");

    let summary = lines.last().unwrap();
    assert_eq!(summary["type"], "summary");
    assert_eq!(summary["alerts"], 1);
    assert_eq!(summary["ticks"], 1501);
    assert_eq!(summary["frame"]["mode"], "short_break");
    assert_eq!(summary["frame"]["display"], "05:00");
    assert_eq!(summary["frame"]["running"], false);
}

#[test]
fn test_simulate_stops_ticking_after_expiry() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["simulate", "--focus", "1", "--start", "--ticks", "500", "--json"],
    );
    assert_eq!(code, 0);
    let summary = json_lines(&stdout).pop().unwrap();
    assert_eq!(summary["ticks"], 61);
    assert_eq!(summary["alerts"], 1);
}

#[test]
fn test_simulate_rejected_decrement() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["simulate", "--short", "1", "-c", "-short", "--json"],
    );
    assert_eq!(code, 0);
    let lines = json_lines(&stdout);
    assert_eq!(lines.len(), 1, "only the summary is printed");
    assert_eq!(lines[0]["frame"]["durations"]["short_break"], 1);
    assert_eq!(lines[0]["alerts"], 0);
}

#[test]
fn test_simulate_unknown_mode_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["simulate", "-c", "+nap"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown mode"));
}

#[test]
fn test_simulate_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "durations.focus", "30"]);
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(dir.path(), &["simulate", "--json"]);
    assert_eq!(code, 0);
    let summary = json_lines(&stdout).pop().unwrap();
    assert_eq!(summary["frame"]["display"], "30:00");
}

#[test]
fn test_config_get_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "durations.long_break"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "10");

    let (code, stdout, _) = run_cli(dir.path(), &["config", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["cadence"]["long_break_every"], 4);
}

#[test]
fn test_config_rejects_bad_values() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "durations.focus", "0"]);
    assert_ne!(code, 0);
    let (code, _, _) = run_cli(dir.path(), &["config", "get", "durations.nap"]);
    assert_ne!(code, 0);
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_reset_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("focus = 25"));
}

#[test]
fn test_run_reads_commands_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli_with_stdin(dir.path(), &["run"], "+focus\nr\nq\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("[Focus] 25:00 paused"));
    assert!(stdout.contains("[Focus] 26:00 paused"));
    assert!(!stdout.contains('\x07'));
}

#[test]
fn test_run_reports_bad_input_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_cli_with_stdin(dir.path(), &["run"], "dance\n-long\n");
    assert_eq!(code, 0);
    assert!(stderr.contains("Unknown command"));
    assert!(stdout.contains("long 9m"));
}

#[test]
fn test_run_skips_non_utf8_input_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = b"\xff\xfe\n+focus\nq\n";
    let (code, stdout, stderr) = run_cli_with_stdin(dir.path(), &["run"], input);
    assert_eq!(code, 0);
    assert!(stderr.contains("UTF-8"));
    assert!(stdout.contains("[Focus] 26:00 paused"));
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("pomotick"));
}
