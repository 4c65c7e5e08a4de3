#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn lumina_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lumina").unwrap();
    cmd.env_remove("LUMINA_ROOT");
    cmd.env_remove("LUMINA_LOG");
    cmd
}

/// A freshly initialized data directory with an anonymous session
pub fn signed_in_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    lumina_cmd().arg("init").arg(temp.path()).assert().success();
    lumina_cmd()
        .current_dir(temp.path())
        .args(["auth", "signin"])
        .assert()
        .success();
    temp
}

/// Record a log non-interactively and expect it to be saved
pub fn log_entry(dir: &Path, args: &[&str]) {
    lumina_cmd()
        .current_dir(dir)
        .arg("log")
        .args(args)
        .assert()
        .success();
}
