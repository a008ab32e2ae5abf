//! # Solace CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file
//! in this directory is compiled as its own test crate and declares
//! `mod common;` to pull these in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get Solace Command (`solace_cmd`)
///
/// An `assert_cmd::Command` for the compiled `solace` binary, with any
/// `SOLACE_*` variables from the surrounding environment removed.
///
/// ## Panics
/// Panics if the `solace` binary cannot be found via `Command::cargo_bin`.
pub fn solace_cmd() -> Command {
    let mut cmd = Command::cargo_bin("solace").expect("Failed to find solace binary for testing");
    cmd.env_remove("SOLACE_DETERMINISTIC")
        .env_remove("SOLACE_SEED")
        .env_remove("SOLACE_LOCALE")
        .env_remove("RUST_LOG");
    cmd
}

/// # Isolated Solace Command (`isolated_cmd`)
///
/// Like `solace_cmd`, but pointed at a configuration file inside a fresh
/// temporary directory so user and project config files on the host are
/// never read. `config_toml` becomes the file's content.
///
/// The returned `TempDir` must be kept alive for as long as the command runs.
pub fn isolated_cmd(config_toml: &str) -> (TempDir, Command) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("solace.toml");
    fs::write(&path, config_toml).expect("Failed to write test config");

    let mut cmd = solace_cmd();
    cmd.current_dir(dir.path()).arg("--config").arg(&path);
    (dir, cmd)
}
