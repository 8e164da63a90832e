//! Integration tests for the sbgrader CLI
//!
//! These tests drive the real binary against class data laid out in a
//! temporary directory, covering the roster, grade, and error paths.


use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create an sbgrader command
fn sbgrader() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("sbgrader"))
}

/// Lay out a two-student class period on disk and return the index path
fn write_class_fixture(dir: &Path) -> PathBuf {
    fs::write(
        dir.join("lts.ltdat"),
        "LT01:::Fractions:::Add and subtract fractions\n\
         LT02:::Decimals:::Compare and order decimals\n",
    )
    .unwrap();
    fs::write(
        dir.join("s1.studat"),
        "sid: 1, lastname: Liddell, firstname: Alice, pronoun: she, \
         scores: {'LT01': [2, 4], 'LT02': [3]}",
    )
    .unwrap();
    fs::write(
        dir.join("s2.studat"),
        "sid: 2, lastname: Rabbit, firstname: White, pronoun: he, scores: {}",
    )
    .unwrap();
    let index = dir.join("class.txt");
    fs::write(&index, "Period_1\nlts.ltdat\ns1.studat\ns2.studat\n").unwrap();
    index
}

#[test]
fn roster_lists_targets_and_overall_grades() {
    let dir = TempDir::new().unwrap();
    let index = write_class_fixture(dir.path());

    sbgrader()
        .args(["--file", index.to_str().unwrap(), "roster"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Period_1"))
        .stdout(predicate::str::contains("LT01: Fractions"))
        .stdout(predicate::str::contains("Alice Liddell"))
        .stdout(predicate::str::contains("A (100%)"))
        // An unassessed student reports as an F at the curve floor
        .stdout(predicate::str::contains("White Rabbit"))
        .stdout(predicate::str::contains("F (50%)"));
}

#[test]
fn grade_emits_machine_readable_json() {
    let dir = TempDir::new().unwrap();
    let index = write_class_fixture(dir.path());

    sbgrader()
        .args(["--json", "--file", index.to_str().unwrap(), "grade", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"letter\": \"A\""))
        .stdout(predicate::str::contains("\"percent\": 100"))
        .stdout(predicate::str::contains("excellent achievement"));
}

#[test]
fn grade_for_unknown_student_fails() {
    let dir = TempDir::new().unwrap();
    let index = write_class_fixture(dir.path());

    sbgrader()
        .args(["--file", index.to_str().unwrap(), "grade", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no student with sid 42"));
}

#[test]
fn score_outside_the_valid_set_is_rejected() {
    let dir = TempDir::new().unwrap();
    let index = write_class_fixture(dir.path());

    sbgrader()
        .args(["--file", index.to_str().unwrap(), "score", "1", "LT02", "2.7"])
        .assert()
        .failure();
}

#[test]
fn score_on_a_missing_target_points_at_target_add() {
    let dir = TempDir::new().unwrap();
    let index = write_class_fixture(dir.path());

    sbgrader()
        .args(["--file", index.to_str().unwrap(), "score", "1", "LT09", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no learning target \"LT09\""));
}

#[test]
fn unknown_score_label_in_data_fails_loudly() {
    let dir = TempDir::new().unwrap();
    let index = write_class_fixture(dir.path());
    fs::write(
        dir.path().join("s1.studat"),
        "sid: 1, lastname: Liddell, firstname: Alice, pronoun: she, \
         scores: {'LT99': [3]}",
    )
    .unwrap();

    sbgrader()
        .args(["--file", index.to_str().unwrap(), "roster"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LT99"));
}

#[test]
fn version_prints_the_crate_version() {
    sbgrader()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("sbgrader v{}", env!("CARGO_PKG_VERSION"))));
}
