//! Command-line behaviour of the `yahtzee` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn yahtzee() -> Command {
    let mut cmd = Command::cargo_bin("yahtzee").unwrap();
    cmd.env_remove("YAHTZEE_LOG").env_remove("YAHTZEE_SEED");
    cmd
}

// ---------------------------------------------------------------------------
// Informational flags
// ---------------------------------------------------------------------------

#[test]
fn help_lists_flags() {
    yahtzee()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--rules"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--interface"));
}

#[test]
fn version_flag() {
    yahtzee()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("yahtzee"));
}

#[test]
fn rules_flag_prints_rules() {
    yahtzee()
        .arg("--rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules of the Game"))
        .stdout(predicate::str::contains("a bonus of 35"));
}

#[test]
fn unknown_argument_fails() {
    yahtzee()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn bad_interface_fails() {
    yahtzee()
        .args(["--interface", "sdl"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// Text play
// ---------------------------------------------------------------------------

#[test]
fn text_mode_shows_banner_and_quits() {
    yahtzee()
        .args(["--interface", "text", "--seed", "7"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Y a h t z e e"))
        .stdout(predicate::str::contains("Roll (abcde) or Score (123456tfhslyx):"));
}

#[test]
fn text_mode_rejects_bad_input() {
    yahtzee()
        .args(["--interface", "text", "--seed", "7"])
        .write_stdin("zz\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Enter (?) for help."));
}

#[test]
fn same_seed_same_game() {
    let run = || {
        yahtzee()
            .args(["--interface", "text", "--seed", "2024"])
            .write_stdin("abcde\nq\n")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn seed_from_environment() {
    let run = |env: &str| {
        yahtzee()
            .env("YAHTZEE_SEED", env)
            .args(["--interface", "text"])
            .write_stdin("q\n")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run("99"), run("99"));
}

#[test]
fn full_text_game() {
    let mut input: String = "123456tfhslyx"
        .chars()
        .map(|k| format!("{k}\n\n"))
        .collect();
    input.push_str("q\n");
    yahtzee()
        .args(["--interface", "text", "--seed", "1"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Score"))
        .stdout(predicate::str::contains("Another game (RET) or Quit (q):"));
}

#[test]
fn log_output_goes_to_stderr() {
    yahtzee()
        .env("YAHTZEE_LOG", "info")
        .args(["--interface", "text", "--seed", "3"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("game started").not())
        .stderr(predicate::str::contains("game started"));
}
