//! Integration tests for list command

use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::daybook_cmd;

fn init_journal(path: &Path) {
    daybook_cmd().arg("init").arg(path).assert().success();
}

fn add_entry(path: &Path, date: &str, content: &str) {
    daybook_cmd()
        .current_dir(path)
        .args(["add", "--date", date, "--content", content])
        .assert()
        .success();
}

#[test]
fn test_list_no_entries() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    daybook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_shows_all_entries() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    add_entry(temp.path(), "2025-01-17", "one");
    add_entry(temp.path(), "2025-01-16", "two");
    add_entry(temp.path(), "2025-01-15", "three");

    daybook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-17"))
        .stdout(predicate::str::contains("2025-01-16"))
        .stdout(predicate::str::contains("2025-01-15"));
}

#[test]
fn test_list_sorted_newest_first() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    add_entry(temp.path(), "2025-01-15", "mid");
    add_entry(temp.path(), "2025-01-20", "new");
    add_entry(temp.path(), "2025-01-10", "old");

    let output = daybook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("2025-01-20"));
    assert!(lines[1].contains("2025-01-15"));
    assert!(lines[2].contains("2025-01-10"));
}

#[test]
fn test_list_json_is_a_sorted_array() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    add_entry(temp.path(), "2025-01-10", "old");
    add_entry(temp.path(), "2025-01-20", "new");

    let output = daybook_cmd()
        .current_dir(temp.path())
        .args(["list", "--json"])
        .output()
        .unwrap();

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let array = entries.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["date"], "2025-01-20");
    assert_eq!(array[1]["date"], "2025-01-10");
}

#[test]
fn test_list_json_empty_collection() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    let output = daybook_cmd()
        .current_dir(temp.path())
        .args(["list", "--json"])
        .output()
        .unwrap();

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries, serde_json::json!([]));
}
