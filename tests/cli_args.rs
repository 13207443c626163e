//! Tests for CLI argument parsing, run against the built binary.

use std::process::Command;

fn vendor_desk_cmd() -> (tempfile::TempDir, Command) {
    // Point at a missing config so the user's own file never leaks in
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vendor-desk"));
    cmd.arg("--config").arg(temp_dir.path().join("config.toml"));
    (temp_dir, cmd)
}

#[test]
fn test_help_lists_overrides() {
    let (_dir, mut cmd) = vendor_desk_cmd();
    let output = cmd.arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--base-url", "--page-size", "--log-level"] {
        assert!(stdout.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn test_version_flag() {
    let (_dir, mut cmd) = vendor_desk_cmd();
    let output = cmd.arg("--version").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_page_size_exits_with_error() {
    let (_dir, mut cmd) = vendor_desk_cmd();
    let output = cmd
        .args(["--page-size", "7"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("page_size 7"));
}

#[test]
fn test_invalid_base_url_exits_with_error() {
    let (_dir, mut cmd) = vendor_desk_cmd();
    let output = cmd
        .args(["--base-url", "not a url"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid base_url"));
}

#[test]
fn test_broken_config_file_exits_with_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[table\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_vendor-desk"))
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}
