//! `init` -> `add` -> `commit` -> `log`, the baseline workflow from
//! `spec.md` §8.

mod common;

use std::fs;

use common::lit;

#[test]
fn init_add_commit_log_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let init = lit(dir.path(), &["init"]);
    assert_eq!(init.exit_code, 0, "stderr: {}", init.stderr);
    assert!(dir.path().join(".lit").is_dir());

    fs::write(dir.path().join("hello.txt"), "hello\nworld\n").unwrap();
    let add = lit(dir.path(), &["add", "hello.txt"]);
    assert_eq!(add.exit_code, 0, "stderr: {}", add.stderr);

    let commit = lit(dir.path(), &["commit", "--message", "add hello"]);
    assert_eq!(commit.exit_code, 0, "stderr: {}", commit.stderr);
    assert!(commit.stdout.contains("add hello"));

    let log = lit(dir.path(), &["log"]);
    assert_eq!(log.exit_code, 0, "stderr: {}", log.stderr);
    assert!(log.stdout.contains("add hello"));
    assert!(log
        .stdout
        .contains("current branch: 'origin', 0 change(s) shelved, with 1 commit(s)"));
}

#[test]
fn commit_with_nothing_staged_fails() {
    let dir = tempfile::tempdir().unwrap();
    lit(dir.path(), &["init"]);

    let commit = lit(dir.path(), &["commit", "--message", "empty"]);
    assert_ne!(commit.exit_code, 0);
    assert!(commit.stderr.contains("nothing shelved") || commit.stderr.contains("commit failed"));
}

#[test]
fn init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(lit(dir.path(), &["init"]).exit_code, 0);
    let second = lit(dir.path(), &["init"]);
    assert_ne!(second.exit_code, 0);
}
