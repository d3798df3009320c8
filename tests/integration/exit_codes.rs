//! Integration tests driving the installed binary
//!
//! Runs the compiled `dirsnap` executable end to end: exit codes, the
//! stdout report / stderr log split, and argument rejection by the parser.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn bin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dirsnap"));
    command.env_remove("DIRSNAP_LOG");
    command.env_remove("DIRSNAP_LOG_FORMAT");
    command
}

#[test]
fn test_capture_and_compare_exit_zero() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("a.txt"), "alpha").unwrap();
    let snap = temp_dir.path().join("snap.json");

    let capture = bin()
        .current_dir(temp_dir.path())
        .arg(&data)
        .arg("-o")
        .arg(&snap)
        .output()
        .unwrap();
    assert!(
        capture.status.success(),
        "capture should succeed: stderr={:?}",
        String::from_utf8_lossy(&capture.stderr)
    );

    let compare = bin()
        .current_dir(temp_dir.path())
        .arg(&data)
        .arg("-i")
        .arg(&snap)
        .output()
        .unwrap();
    assert!(compare.status.success());
    assert!(String::from_utf8_lossy(&compare.stdout).contains("Content is identical."));
}

#[test]
fn test_differences_found_still_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("a.txt"), "alpha").unwrap();
    let snap = temp_dir.path().join("snap.json");

    let capture = bin().arg(&data).arg("-o").arg(&snap).output().unwrap();
    assert!(capture.status.success());

    fs::write(data.join("a.txt"), "changed").unwrap();

    let compare = bin().arg(&data).arg("-i").arg(&snap).output().unwrap();
    assert!(
        compare.status.success(),
        "a run that finds differences still succeeds"
    );
    assert!(String::from_utf8_lossy(&compare.stdout).contains("FILE_HASH_DIFF"));
}

#[test]
fn test_non_directory_target_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let output = bin().arg(&missing).arg("-o").arg("snap.json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a directory"));
}

#[test]
fn test_missing_operation_flag_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = bin().arg(temp_dir.path()).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("required"));
}

#[test]
fn test_report_on_stdout_logs_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("a.txt"), "alpha").unwrap();
    let snap = temp_dir.path().join("snap.json");

    let output = bin()
        .current_dir(temp_dir.path())
        .arg(&data)
        .arg("-o")
        .arg(&snap)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Files hashed: 1"));
    assert!(!stdout.contains("Starting capture"));
    assert!(
        stderr.contains("Starting capture"),
        "info events should land on stderr; got: {}",
        stderr.lines().next().unwrap_or("")
    );
}

#[test]
fn test_json_log_format_flag() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    let snap = temp_dir.path().join("snap.json");

    let output = bin()
        .current_dir(temp_dir.path())
        .arg(&data)
        .arg("-o")
        .arg(&snap)
        .arg("--log-format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first_line = stderr.lines().find(|l| !l.is_empty()).unwrap();
    assert!(
        first_line.starts_with('{'),
        "json log lines expected on stderr; got: {}",
        first_line
    );
}
