//! Integration tests for trends and the home view

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::{log_entry, lumina_cmd, signed_in_dir};

#[test]
fn test_trends_without_data() {
    let temp = signed_in_dir();

    lumina_cmd()
        .current_dir(temp.path())
        .arg("trends")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Not enough data yet. Keep logging to see your insights!",
        ));
}

#[test]
fn test_trends_report() {
    let temp = signed_in_dir();
    log_entry(
        temp.path(),
        &["--mood", "2", "--sleep", "5", "--energy", "2", "--date", "2026-02-22"],
    );
    log_entry(
        temp.path(),
        &["--mood", "3", "--sleep", "6", "-i", "Exercise", "--date", "2026-02-23"],
    );
    log_entry(
        temp.path(),
        &["--mood", "5", "--sleep", "8", "-i", "Exercise", "--date", "2026-02-24"],
    );

    lumina_cmd()
        .current_dir(temp.path())
        .args(["trends", "--days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood & Sleep, last 7 days"))
        .stdout(predicate::str::contains("Sun 22-02"))
        .stdout(predicate::str::contains("Mood by Sleep Duration"))
        .stdout(predicate::str::contains("Sleep:  6.3h (goal 8h)"))
        .stdout(predicate::str::contains("Sleep Duration"))
        .stdout(predicate::str::contains("Exercise"));
}

#[test]
fn test_trends_uses_profile_sleep_goal() {
    let temp = signed_in_dir();
    log_entry(temp.path(), &["--mood", "4", "--sleep", "9"]);

    lumina_cmd()
        .current_dir(temp.path())
        .args(["prefs", "sleep_goal", "7.5"])
        .assert()
        .success();

    lumina_cmd()
        .current_dir(temp.path())
        .arg("trends")
        .assert()
        .success()
        .stdout(predicate::str::contains("(goal 7.5h)"))
        .stdout(predicate::str::contains("Meeting your sleep goal"));
}

#[test]
fn test_home_without_logs() {
    let temp = signed_in_dir();

    lumina_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hello, there"))
        .stdout(predicate::str::contains("No log for today yet"));
}

#[test]
fn test_home_shows_today_and_recent() {
    let temp = signed_in_dir();
    log_entry(temp.path(), &["--mood", "great", "--sleep", "8", "--date", "2026-02-20"]);
    log_entry(temp.path(), &["--mood", "4", "--energy", "high", "--sleep", "7.5"]);

    lumina_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Today  Sleep: 7.5h  Energy: High"))
        .stdout(predicate::str::contains("Feb 20  Mood: Great • Sleep: 8h"));
}

#[test]
fn test_trends_with_huge_window() {
    let temp = signed_in_dir();
    log_entry(temp.path(), &["--mood", "4", "--sleep", "7"]);

    lumina_cmd()
        .current_dir(temp.path())
        .args(["trends", "--days", "4000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood by Sleep Duration"));

    lumina_cmd()
        .current_dir(temp.path())
        .args(["config", "trend_days", "4000000000"])
        .assert()
        .success();

    lumina_cmd()
        .current_dir(temp.path())
        .arg("trends")
        .assert()
        .success()
        .stdout(predicate::str::contains("last 4000000000 days"));
}
