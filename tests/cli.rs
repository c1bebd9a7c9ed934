//! End-to-end tests for the tomata binary.
//!
//! Each test points HOME at a temporary directory so configuration and
//! session logs stay isolated.

use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use tempfile::TempDir;

fn tomata(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tomata").expect("binary builds");
    cmd.env("HOME", home.path());
    cmd
}

fn write_log_block(home: &TempDir, date: &str, plan: &str, note: &str) {
    let sessions = home.path().join(".tomata").join("sessions");
    std::fs::create_dir_all(&sessions).unwrap();
    let block = format!(
        "=== Pomodoro Session Ended: {date} 09:00:00 ===\nPlanned Task: {plan}\nCompleted: {note}\n\n"
    );
    std::fs::write(sessions.join(format!("pomodoro_log_{date}.txt")), block).unwrap();
}

#[test]
fn help_mentions_pomodoro() {
    let home = TempDir::new().unwrap();
    tomata(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro"));
}

#[test]
fn log_with_no_sessions_reports_empty_day() {
    let home = TempDir::new().unwrap();
    tomata(&home)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded"));
}

#[test]
fn log_shows_recorded_session() {
    let home = TempDir::new().unwrap();
    write_log_block(&home, "2024-06-01", "Write report", "Drafted intro");

    tomata(&home)
        .args(["log", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write report"))
        .stdout(predicate::str::contains("Drafted intro"));
}

#[test]
fn log_defaults_to_today() {
    let home = TempDir::new().unwrap();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    write_log_block(&home, &today, "Morning review", "");

    tomata(&home)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning review"));
}

#[test]
fn log_json_output_is_parseable() {
    let home = TempDir::new().unwrap();
    write_log_block(&home, "2024-06-01", "Write report", "Drafted intro");

    let output = tomata(&home)
        .args(["log", "--date", "2024-06-01", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["sessions"][0]["planned_task"], "Write report");
}

#[test]
fn log_rejects_malformed_date() {
    let home = TempDir::new().unwrap();
    tomata(&home)
        .args(["log", "--date", "June 1st"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}
