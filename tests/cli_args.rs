//! Tests for the binary's argument handling. None of these reach the
//! terminal screen: each one exits during startup.

use std::process::Command;

fn pinfield_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pinfield"))
}

#[test]
fn test_help_lists_field_options() {
    let output = pinfield_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--length"));
    assert!(stdout.contains("--delete-mode"));
    assert!(stdout.contains("--no-secure"));
    assert!(stdout.contains("--placeholder"));
}

#[test]
fn test_zero_length_exits_with_error() {
    let output = pinfield_cmd()
        .args(["--config", "/nonexistent/pinfield/config.toml", "--length", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("length must be between 1 and 64"));
}

#[test]
fn test_focus_outside_field_exits_with_error() {
    let output = pinfield_cmd()
        .args([
            "--config",
            "/nonexistent/pinfield/config.toml",
            "--length",
            "4",
            "--focus",
            "4",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("initial_focus 4 is outside a field of 4 cells"));
}

#[test]
fn test_unknown_style_is_a_usage_error() {
    let output = pinfield_cmd()
        .args(["--style", "round"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--style"));
}
