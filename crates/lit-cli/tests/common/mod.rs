//! Shared test harness for `lit-cli` integration tests: spawn the compiled
//! `lit` binary against a temporary working directory and capture its
//! output, the way `gitr`'s `git-cli` test suite drives the `gitr` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Locate the compiled `lit` binary next to the test harness executable.
pub fn lit_bin() -> PathBuf {
    let mut path = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();
    path.push("lit");
    path
}

pub fn lit(dir: &Path, args: &[&str]) -> CommandResult {
    let output = Command::new(lit_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run lit");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(1),
    }
}
