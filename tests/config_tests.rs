//! Integration tests for config command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::daybook_cmd;

#[test]
fn test_config_list_shows_defaults() {
    let temp = TempDir::new().unwrap();

    daybook_cmd().arg("init").arg(temp.path()).assert().success();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data_file = journal.json"))
        .stdout(predicate::str::contains("media_dir = uploads"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_get_single_key() {
    let temp = TempDir::new().unwrap();

    daybook_cmd().arg("init").arg(temp.path()).assert().success();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "media_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uploads"));
}

#[test]
fn test_config_set_and_get() {
    let temp = TempDir::new().unwrap();

    daybook_cmd().arg("init").arg(temp.path()).assert().success();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "data_file", "entries.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set data_file = entries.json"));

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "data_file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entries.json"));
}

#[test]
fn test_config_set_data_file_moves_document_target() {
    let temp = TempDir::new().unwrap();

    daybook_cmd().arg("init").arg(temp.path()).assert().success();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "data_file", "entries.json"])
        .assert()
        .success();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["add", "--date", "2025-01-01", "--content", "hello"])
        .assert()
        .success();

    assert!(temp.path().join("entries.json").is_file());
    assert!(!temp.path().join("journal.json").exists());
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    daybook_cmd().arg("init").arg(temp.path()).assert().success();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();

    daybook_cmd().arg("init").arg(temp.path()).assert().success();

    daybook_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_daybook_root_env_points_at_journal() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    daybook_cmd().arg("init").arg(temp.path()).assert().success();

    daybook_cmd()
        .current_dir(elsewhere.path())
        .env("DAYBOOK_ROOT", temp.path())
        .args(["config", "media_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uploads"));
}
