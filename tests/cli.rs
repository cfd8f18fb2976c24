//! Command-line smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    Command::cargo_bin("pomo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--work"))
        .stdout(predicate::str::contains("--break"))
        .stdout(predicate::str::contains("--sessions"))
        .stdout(predicate::str::contains("--no-sound"));
}

#[test]
fn test_version() {
    Command::cargo_bin("pomo")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pomo"));
}

#[test]
fn test_unknown_flag_fails() {
    Command::cargo_bin("pomo")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_unparsable_config_file_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    std::fs::write(&config_path, "timer: [broken").unwrap();

    Command::cargo_bin("pomo")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
