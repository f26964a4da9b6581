//! Integration tests for the `paginate` subcommand.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pagefold").unwrap()
}

/// Write `contents` as the input file of a fresh temp dir; returns the dir
/// plus input and output paths.
fn fixture(contents: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, contents).unwrap();
    (dir, input, output)
}

#[test]
fn paginates_into_the_output_file() {
    let (_dir, input, output) = fixture("a bb ccc dddd");

    cmd()
        .args([
            "paginate",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--max-chars",
            "4",
            "--max-lines",
            "2",
        ])
        .assert()
        .success();

    let paged = fs::read_to_string(&output).unwrap();
    assert_eq!(paged, "a bb\nccc\n\nPage 1\n\ndddd\n\n\nPage 2\n\n");
}

#[test]
fn reports_top_words() {
    let (_dir, input, output) = fixture("to be or not to be");

    cmd()
        .args([
            "paginate",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--max-chars",
            "10",
            "--max-lines",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 10 most used words:"))
        .stdout(predicate::str::contains(
            "Word\tAbsolute Frequency\tRelative Frequency (%)",
        ))
        .stdout(predicate::str::contains("to\t2\t33.33%"))
        .stdout(predicate::str::contains("be\t2\t33.33%"));
}

#[test]
fn top_flag_limits_the_report() {
    let (_dir, input, output) = fixture("a a a b b c");

    cmd()
        .args([
            "paginate",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--max-chars",
            "10",
            "--max-lines",
            "5",
            "--top",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1 most used words:"))
        .stdout(predicate::str::contains("a\t3"))
        .stdout(predicate::str::contains("b\t2").not());
}

#[test]
fn json_report_parses_and_carries_totals() {
    let (_dir, input, output) = fixture("to be or not to be");

    let result = cmd()
        .args([
            "paginate",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--max-chars",
            "10",
            "--max-lines",
            "5",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["total_words"], 6);
    assert_eq!(json["distinct_words"], 4);
    assert_eq!(json["pages"], 1);
    let top = json["top_words"].as_array().unwrap();
    assert_eq!(top[0]["word"], "to");
    assert_eq!(top[0]["count"], 2);
}

#[test]
fn timing_is_reported_on_stderr() {
    let (_dir, input, output) = fixture("some words here");

    cmd()
        .args([
            "paginate",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--max-chars",
            "8",
            "--max-lines",
            "3",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("ms"));
}

#[test]
fn empty_input_still_writes_one_page() {
    let (_dir, input, output) = fixture("");

    cmd()
        .args([
            "paginate",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--max-chars",
            "10",
            "--max-lines",
            "3",
        ])
        .assert()
        .success();

    let paged = fs::read_to_string(&output).unwrap();
    assert_eq!(paged, "\n\n\nPage 1\n\n");
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");

    cmd()
        .args([
            "paginate",
            "/nonexistent/input.txt",
            output.to_str().unwrap(),
            "--max-chars",
            "10",
            "--max-lines",
            "3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: file not found"));
}

#[test]
fn zero_limit_fails_before_processing() {
    let (_dir, input, output) = fixture("words");

    cmd()
        .args([
            "paginate",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--max-chars",
            "0",
            "--max-lines",
            "3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max-chars must be at least 1"));

    assert!(!output.exists());
}
