//! # Solace CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! Runs `solace ask` as a black box and checks the printed reply.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_ask_plain_text() {
    let (_dir, mut cmd) = isolated_cmd("[responder]\ndeterministic = true\n");
    cmd.args(["ask", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("How are you feeling right now?"));
}

#[test]
fn test_ask_joins_words() {
    let (_dir, mut cmd) = isolated_cmd("");
    cmd.args(["--deterministic", "ask", "--json", "I", "feel", "sad", "about", "our", "anniversary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\":\"anniversary\""))
        .stdout(predicate::str::contains("\"matched_terms\":\"anniversary,feeling_bad\""));
}

#[test]
fn test_ask_crisis_json() {
    let (_dir, mut cmd) = isolated_cmd("");
    cmd.args(["ask", "--json", "I don't want to live anymore, any tips?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\":\"crisis\""))
        .stdout(predicate::str::contains("\"matched_terms\":\"crisis\""))
        .stdout(predicate::str::contains("988"));
}

#[test]
fn test_ask_advice_request() {
    let (_dir, mut cmd) = isolated_cmd("");
    cmd.args(["ask", "--json", "any tip to help right now?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\":\"self_care\""))
        .stdout(predicate::str::contains("\"matched_terms\":\"self_care(help)\""))
        .stdout(predicate::str::contains("It sounds like you could use support."));
}

#[test]
fn test_ask_blank_message_fails() {
    let (_dir, mut cmd) = isolated_cmd("");
    cmd.args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Message must not be empty"));
}

#[test]
fn test_ask_requires_message() {
    solace_cmd().arg("ask").assert().failure();
}

#[test]
fn test_ask_debug_logging_omits_message_text() {
    let (_dir, mut cmd) = isolated_cmd("");
    let output = cmd
        .args(["-vv", "ask", "MARKER-7f3a about my loss"])
        .output()
        .expect("Failed to run solace ask");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Running 'ask' command"), "stderr: {}", stderr);
    assert!(!stderr.contains("MARKER-7f3a"), "message text leaked to logs: {}", stderr);
}
