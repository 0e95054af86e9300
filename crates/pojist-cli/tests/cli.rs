//! End-to-end tests for the pojist binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pojist() -> Command {
    Command::cargo_bin("pojist").unwrap()
}

fn write_config(root: &Path) -> std::path::PathBuf {
    let config = serde_json::json!({
        "watch": {
            "watch_folder": root.join("inbox"),
            "sorted_folder": root.join("sorted"),
            "error_folder": root.join("errors"),
        },
        "output": { "csv_path": root.join("pojistky.csv") }
    });
    let path = root.join("config.json");
    fs::write(&path, config.to_string()).unwrap();
    path
}

#[test]
fn help_lists_commands() {
    pojist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("batch"));
}

#[test]
fn config_show_prints_defaults_without_file() {
    let dir = TempDir::new().unwrap();

    pojist()
        .arg("-c")
        .arg(dir.path().join("missing.json"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"poll_interval_ms\": 1000"))
        .stdout(predicate::str::contains("pojistky.csv"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    pojist()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    pojist()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    pojist()
        .args(["config", "init", "--force", "--output"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn process_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    pojist()
        .arg("process")
        .arg(dir.path().join("nic.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn process_rejects_invalid_pdf() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rozbite.pdf");
    fs::write(&path, b"this is not a pdf").unwrap();

    pojist().arg("process").arg(&path).assert().failure();
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    pojist()
        .arg("-c")
        .arg(&config)
        .arg("batch")
        .arg(format!("{}/*.pdf", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn batch_archives_failures_and_continues() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let inbox = dir.path().join("inbox");
    fs::create_dir_all(&inbox).unwrap();
    fs::write(inbox.join("rozbite.pdf"), b"not a pdf").unwrap();

    pojist()
        .arg("-c")
        .arg(&config)
        .args(["batch", "--archive", "--continue-on-error"])
        .arg(format!("{}/*.pdf", inbox.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed files:"))
        .stdout(predicate::str::contains("rozbite.pdf"));

    assert!(!inbox.join("rozbite.pdf").exists());
    assert!(dir.path().join("errors").join("rozbite.pdf").exists());
    assert!(!dir.path().join("pojistky.csv").exists());
}

#[test]
fn batch_records_and_sorts_recognized_pdf() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let inbox = dir.path().join("inbox");
    fs::create_dir_all(&inbox).unwrap();
    fs::copy(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/allianz.pdf"),
        inbox.join("novak.pdf"),
    )
    .unwrap();

    pojist()
        .arg("-c")
        .arg(&config)
        .args(["batch", "--archive"])
        .arg(format!("{}/*.pdf", inbox.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 recorded"));

    let csv = fs::read_to_string(dir.path().join("pojistky.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Jméno a příjmení,"));
    assert!(lines[1].contains("100/100"));
    assert!(lines[1].ends_with(",novak.pdf"));

    assert!(!inbox.join("novak.pdf").exists());
    assert!(dir.path().join("sorted").join("novak.pdf").exists());
}

#[test]
fn process_prints_record_as_json() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/allianz.pdf");

    pojist()
        .arg("process")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Krytí PR\": \"100/100\""))
        .stdout(predicate::str::contains("\"Zdrojový soubor\": \"allianz.pdf\""));
}

#[test]
fn batch_stops_on_first_error_by_default() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    fs::write(dir.path().join("rozbite.pdf"), b"not a pdf").unwrap();

    pojist()
        .arg("-c")
        .arg(&config)
        .arg("batch")
        .arg(format!("{}/*.pdf", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));

    assert!(dir.path().join("rozbite.pdf").exists());
}
