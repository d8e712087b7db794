//! Tests for the demo binary.
//!
//! These run the actual binary and check its output and exit status.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn argset_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_argset"))
}

#[test]
fn test_parses_mixed_forms() {
    let output = argset_cmd()
        .args(["--message=test", "-p", "-n", "69"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("message=test"));
    assert!(stdout.contains("print=true"));
    assert!(stdout.contains("nums=69"));
}

#[test]
fn test_defaults_without_arguments() {
    let output = argset_cmd().output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("message=COOL!"));
    assert!(stdout.contains("print=false"));
    assert!(stdout.contains("nums=0"));
}

#[test]
fn test_help_shows_flags_and_exits_cleanly() {
    let output = argset_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-m, --message"));
    assert!(stdout.contains("Sets a cool message"));
    assert!(!stdout.contains("message=COOL!"));
}

#[test]
fn test_bad_int_exits_with_error() {
    let output = argset_cmd()
        .args(["-n", "lots"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Value 'lots' for flag 'nums' could not be converted to int"));
}

#[test]
fn test_missing_value_exits_with_error() {
    let output = argset_cmd()
        .arg("--message")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("requires a value"));
}

#[test]
fn test_defaults_file_then_command_line_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("defaults.toml");
    fs::write(&path, "message = \"from file\"\nnums = 7\n").unwrap();

    let output = argset_cmd()
        .args(["--defaults", path.to_str().unwrap(), "-n", "8"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("message=from file"));
    assert!(stdout.contains("nums=8"));
}

#[test]
fn test_file_flag_reports_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.txt");
    fs::write(&path, "12345").unwrap();

    let output = argset_cmd()
        .args(["--file", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("file_bytes=5"));
}

#[test]
fn test_unreadable_file_exits_with_error() {
    let output = argset_cmd()
        .args(["--file", "/definitely/not/here.txt"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read file"));
}
