//! Integration tests for failed submissions and the sync command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{lumina_cmd, signed_in_dir};

#[test]
fn test_failed_log_is_queued_and_synced() {
    let temp = signed_in_dir();
    let logs_path = temp.path().join(".lumina/logs.toml");
    // A directory in place of the log file makes every insert fail
    fs::create_dir(&logs_path).unwrap();

    lumina_cmd()
        .current_dir(temp.path())
        .args(["log", "--mood", "4", "--notes", "kept", "--date", "2026-02-24"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("lumina sync"));

    let pending = fs::read_to_string(temp.path().join(".lumina/pending.toml")).unwrap();
    assert!(pending.contains("notes = \"kept\""));

    lumina_cmd()
        .current_dir(temp.path())
        .arg("sync")
        .assert()
        .code(5)
        .stdout(predicate::str::contains("Submitted 0 queued log(s), 1 still pending"));

    fs::remove_dir(&logs_path).unwrap();

    lumina_cmd()
        .current_dir(temp.path())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitted 1 queued log(s), 0 still pending"));

    lumina_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("24-02-2026"))
        .stdout(predicate::str::contains("\"kept\""));
}

#[test]
fn test_sync_with_empty_queue() {
    let temp = signed_in_dir();

    lumina_cmd()
        .current_dir(temp.path())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitted 0 queued log(s), 0 still pending"));
}
