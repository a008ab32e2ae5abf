//! # Solace CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Top-level behavior of the `solace` binary: standard flags, subcommand
//! listing and configuration errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    solace_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("srv"));
}

#[test]
fn test_version_flag() {
    solace_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_config_file_fails() {
    solace_cmd()
        .args(["--config", "/definitely/not/here/solace.toml", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_invalid_config_file_fails() {
    let (_dir, mut cmd) = isolated_cmd("[server]\nmax_sessions = 0\n");
    cmd.arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_sessions"));
}

#[test]
fn test_unknown_config_key_fails() {
    let (_dir, mut cmd) = isolated_cmd("[responder]\nmood = \"sunny\"\n");
    cmd.arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}
