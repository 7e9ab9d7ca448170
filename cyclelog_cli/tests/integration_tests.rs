//! Integration tests for the cyclelog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Session editing and entry logging
//! - Log, exercise, and cycle views
//! - Goal updates
//! - CSV export

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("cyclelog"))
}

/// Log one strength entry into the given data dir
fn add_entry(data_dir: &Path, exercise: &str) {
    cli()
        .arg("add")
        .arg(exercise)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged"));
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hybrid athlete workout tracker"));
}

#[test]
fn test_add_creates_snapshot() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    add_entry(&data_dir, "Weighted Pull-up");

    let snapshot = data_dir.join("tracker.json");
    assert!(snapshot.exists());
    let contents = fs::read_to_string(&snapshot).expect("Failed to read snapshot");
    assert!(contents.contains("Weighted Pull-up"));
}

#[test]
fn test_add_without_exercise_logs_nothing() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("add")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing logged"));

    cli()
        .arg("log")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_log_shows_newest_entry_first() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    add_entry(&data_dir, "Ring Dip");
    add_entry(&data_dir, "Front Lever");

    let output = cli()
        .arg("log")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lever = stdout.find("Front Lever").expect("Front Lever missing");
    let dip = stdout.find("Ring Dip").expect("Ring Dip missing");
    assert!(lever < dip, "newest entry should be listed first");
}

#[test]
fn test_session_edit_is_stamped_onto_new_entries() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("session")
        .arg("--week")
        .arg("3")
        .arg("--day")
        .arg("pull")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Week:       3"))
        .stdout(predicate::str::contains("D2 - Strength Pull"));

    add_entry(&data_dir, "Weighted Pull-up");

    cli()
        .arg("cycle")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
}

#[test]
fn test_cycle_dashboard_reports_rope_minutes() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("add")
        .arg("Rope Conditioning")
        .arg("--category")
        .arg("rope")
        .arg("--work")
        .arg("30")
        .arg("--rounds")
        .arg("6")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .arg("cycle")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("3.0"));
}

#[test]
fn test_exercises_summary_shows_latest() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    add_entry(&data_dir, "L-Sit");
    add_entry(&data_dir, "L-Sit");

    cli()
        .arg("exercises")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("L-Sit"))
        .stdout(predicate::str::contains("[2 logged]"));
}

#[test]
fn test_goal_update_persists() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("goals")
        .arg("set")
        .arg("1")
        .arg("--baseline")
        .arg("+20% BW x 3")
        .arg("--achieved")
        .arg("yes")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("+20% BW x 3"));

    cli()
        .arg("goals")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] #1"));
}

#[test]
fn test_goal_update_unknown_id_is_noop() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("goals")
        .arg("set")
        .arg("99")
        .arg("--achieved")
        .arg("yes")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]").not());
}

#[test]
fn test_remove_entry() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    add_entry(&data_dir, "Ring Dip");

    // Pull the entry id out of the snapshot
    let snapshot = fs::read_to_string(data_dir.join("tracker.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
    let id = parsed["entries"]["entries"][0]["id"].as_str().unwrap().to_string();

    cli()
        .arg("remove")
        .arg(&id)
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 entries remain"));
}

#[test]
fn test_export_writes_csv() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();
    let out = data_dir.join("export.csv");

    add_entry(&data_dir, "Weighted Pull-up");

    cli()
        .arg("export")
        .arg("--out")
        .arg(&out)
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.contains("Weighted Pull-up"));
}

#[test]
fn test_draft_counts_persist_between_adds() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("add")
        .arg("Weighted Pull-up")
        .arg("--sets")
        .arg("5")
        .arg("--weight")
        .arg("+20kg")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    // Sets stick for the next block, weight clears
    add_entry(&data_dir, "Ring Dip");

    let snapshot = fs::read_to_string(data_dir.join("tracker.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
    let newest = &parsed["entries"]["entries"][0];
    assert_eq!(newest["exercise"], "Ring Dip");
    assert_eq!(newest["sets"], "5");
    assert_eq!(newest["weight"], "");
}
