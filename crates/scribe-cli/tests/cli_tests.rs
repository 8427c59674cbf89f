//! CLI end-to-end tests that invoke the compiled `scribe` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn scribe(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("scribe").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("scribe")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("insert").and(predicate::str::contains("apply")));
}

#[test]
fn test_insert_at_negative_index() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "list.txt", "one\ntwo\nthree");

    scribe(temp.path())
        .args(["insert", "list.txt", "four", "--at=-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    assert_eq!(read(temp.path(), "list.txt"), "one\ntwo\nfour\nthree");
}

#[test]
fn test_insert_block_above_every_regex() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "lib.rs", "fn a() {}\n\nfn b() {}\n");

    scribe(temp.path())
        .args([
            "insert",
            "lib.rs",
            "#[inline]",
            "#[must_use]",
            "--above-every",
            "^fn ",
            "--regex",
        ])
        .assert()
        .success();

    assert_eq!(
        read(temp.path(), "lib.rs"),
        "#[inline]\n#[must_use]\nfn a() {}\n\n#[inline]\n#[must_use]\nfn b() {}\n"
    );
}

#[test]
fn test_insert_with_two_locators_is_ambiguous() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "x\n");

    scribe(temp.path())
        .args(["insert", "a.txt", "y", "--at", "0", "--below", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ambiguous locator"));

    assert_eq!(read(temp.path(), "a.txt"), "x\n");
}

#[test]
fn test_insert_without_locator_is_missing() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "x\n");

    scribe(temp.path())
        .args(["insert", "a.txt", "y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing locator"));
}

#[test]
fn test_delete_line_no_match_fails() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "x\n");

    scribe(temp.path())
        .args(["delete", "a.txt", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No line matches pattern: missing"));
}

#[test]
fn test_delete_every_block() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "one\none\none\ntwo");

    scribe(temp.path())
        .args(["delete", "a.txt", "one", "one", "--every"])
        .assert()
        .success();

    assert_eq!(read(temp.path(), "a.txt"), "one\ntwo");
}

#[test]
fn test_replace_and_append() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "v1 v1");

    scribe(temp.path())
        .args(["replace", "a.txt", "v1", "v2"])
        .assert()
        .success();
    scribe(temp.path())
        .args(["append", "a.txt", "tail"])
        .assert()
        .success();

    assert_eq!(read(temp.path(), "a.txt"), "v2 v2\ntail\n");
}

#[test]
fn test_unchanged_file_is_reported() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "abc\n");

    scribe(temp.path())
        .args(["replace", "a.txt", "zzz", "y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));
}

#[test]
fn test_contains_exit_codes() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "hello\n");

    scribe(temp.path())
        .args(["contains", "a.txt", "ell"])
        .assert()
        .success();
    scribe(temp.path())
        .args(["contains", "a.txt", "bye"])
        .assert()
        .code(1);
}

#[test]
fn test_apply_json_plan_dry_run() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "one\n");
    write(
        temp.path(),
        "plan.json",
        r#"{"steps": [
            {"edit": {"files": ["*.txt"], "ops": [{"append": {"lines": ["two"]}}]}},
            {"run": {"command": "echo hi"}}
        ]}"#,
    );

    scribe(temp.path())
        .args(["apply", "plan.json", "--dry-run"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("would update")
                .and(predicate::str::contains("a.txt"))
                .and(predicate::str::contains("would run")),
        );

    assert_eq!(read(temp.path(), "a.txt"), "one\n");
}

#[cfg(unix)]
#[test]
fn test_apply_toml_plan_runs_commands() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "one\n");
    write(
        temp.path(),
        "plan.toml",
        r#"
[[steps]]
[steps.edit]
files = ["*.txt"]
ops = [{ insert = { lines = ["zero"], at = 0 } }]

[[steps]]
[steps.run]
command = "cat a.txt"
"#,
    );

    scribe(temp.path())
        .args(["apply", "plan.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zero\none"));

    assert_eq!(read(temp.path(), "a.txt"), "zero\none\n");
}

#[cfg(unix)]
#[test]
fn test_apply_failing_command_reports_exit_code() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "plan.yaml",
        "steps:\n  - run:\n      command: \"echo broken >&2; exit 4\"\n",
    );

    scribe(temp.path())
        .args(["apply", "plan.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exit code 4").and(predicate::str::contains("broken")));
}
