//! Command-line tests for the walkclean binary


use std::fs;

use assert_cmd::Command;
use harness::{TestTree, run_walkclean, testdata};
use predicates::prelude::*;

fn walkclean() -> Command {
    let mut cmd = Command::cargo_bin("walkclean").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_relative_root() {
    let tree = TestTree::new();
    testdata(&tree);

    let (stdout, _stderr, success) = run_walkclean(tree.path(), &["--root", "testdata", "--list"]);
    assert!(success);
    assert_eq!(stdout, "testdata/dir.log\ntestdata/dir2/script.sh\n");
}

#[test]
fn test_repeatable_extension_flag() {
    let tree = TestTree::new();
    testdata(&tree);
    tree.add_file("testdata/notes.txt", "text");

    let (stdout, _stderr, success) = run_walkclean(
        tree.path(),
        &["--root", "testdata", "--list", "--ext", ".sh", "--ext", ".txt"],
    );
    assert!(success);
    assert_eq!(stdout, "testdata/dir2/script.sh\ntestdata/notes.txt\n");
}

#[test]
fn test_size_flag() {
    let tree = TestTree::new();
    testdata(&tree);

    walkclean()
        .current_dir(tree.path())
        .args(["--root", "testdata", "--list", "--ext", ".log", "--size", "20"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_delete_writes_log_file() {
    let tree = TestTree::new();
    tree.add_numbered(".log", 2, "dummy");
    tree.add_numbered(".gz", 1, "dummy");
    let logs = TestTree::new();
    let log_file = logs.path().join("deleted.log");

    walkclean()
        .arg("--root")
        .arg(tree.path())
        .args(["--del", "--ext", ".log", "--log"])
        .arg(&log_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(tree.entries(), vec!["file1.gz"]);
    let log = fs::read_to_string(&log_file).unwrap();
    assert_eq!(log.lines().count(), 2);
    assert!(log.lines().all(|l| l.starts_with("DELETED FILE: ")));
}

#[test]
fn test_log_file_is_appended() {
    let tree = TestTree::new();
    tree.add_file("old.log", "dummy");
    let logs = TestTree::new();
    let log_file = logs.add_file("deleted.log", "previous run\n");

    walkclean()
        .arg("--root")
        .arg(tree.path())
        .args(["--delete", "--log"])
        .arg(&log_file)
        .assert()
        .success();

    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.starts_with("previous run\n"));
    assert_eq!(log.lines().count(), 2);
}

#[test]
fn test_delete_logs_to_stderr_by_default() {
    let tree = TestTree::new();
    tree.add_file("gone.log", "dummy");

    walkclean()
        .arg("--root")
        .arg(tree.path())
        .arg("--del")
        .assert()
        .success()
        .stderr(predicate::str::contains("DELETED FILE: ").and(predicate::str::contains("gone.log")));
}

#[test]
fn test_archive_flag() {
    let tree = TestTree::new();
    tree.add_numbered(".log", 3, "dummy");
    let dest = TestTree::new();

    let assert = walkclean()
        .arg("--root")
        .arg(tree.path())
        .arg("--archive")
        .arg(dest.path())
        .assert()
        .success();

    // Archived files are kept, so they are listed
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.lines().count(), 3, "stdout: {}", stdout);
    assert!(stdout.lines().all(|l| l.ends_with(".log")));

    assert_eq!(
        dest.entries(),
        vec!["file1.log.gz", "file2.log.gz", "file3.log.gz"]
    );
    assert_eq!(tree.entries().len(), 3);
}

#[test]
fn test_archive_destination_not_a_directory() {
    let tree = TestTree::new();
    tree.add_file("a.log", "dummy");
    let not_dir = tree.add_file("dest", "");

    walkclean()
        .arg("--root")
        .arg(tree.path())
        .arg("--archive")
        .arg(&not_dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_missing_root_fails() {
    let tree = TestTree::new();

    walkclean()
        .current_dir(tree.path())
        .args(["--root", "nowhere", "--list"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("walkclean: "));
}

#[test]
fn test_date_filter() {
    let tree = TestTree::new();
    tree.add_file("fresh.log", "dummy");

    walkclean()
        .arg("--root")
        .arg(tree.path())
        .args(["--list", "--date", "1970-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh.log"));

    walkclean()
        .arg("--root")
        .arg(tree.path())
        .args(["--list", "--date", "9999-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_newer_filter() {
    let tree = TestTree::new();
    tree.add_file("fresh.log", "dummy");

    walkclean()
        .arg("--root")
        .arg(tree.path())
        .args(["--list", "--newer", "1h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh.log"));
}

#[test]
fn test_invalid_date_rejected() {
    walkclean()
        .args(["--list", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --date"));
}

#[test]
fn test_date_and_newer_conflict() {
    walkclean()
        .args(["--list", "--date", "2024-01-01", "--newer", "1d"])
        .assert()
        .failure();
}

#[test]
fn test_verbose_emits_diagnostics() {
    let tree = TestTree::new();
    tree.add_file("a.log", "dummy");

    walkclean()
        .arg("--root")
        .arg(tree.path())
        .args(["--list", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.log"))
        .stderr(predicate::str::contains("starting walk"));
}
