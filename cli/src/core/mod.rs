//! # Solace Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Infrastructure shared by every command:
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the crate-wide `Result` alias
//! - `logging`: tracing subscriber setup driven by `-v` and `RUST_LOG`
//!
pub mod config;
pub mod error;
pub mod logging;
