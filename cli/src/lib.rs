//! # Solace Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Solace is a rule-based grief support responder. It classifies a short
//! message into an emotional or topical category and answers with a
//! supportive reply. Crisis language always takes precedence.
//!
//! The library exposes:
//! - `responder`: the classifier and reply selection (no I/O, never fails)
//! - `core`: configuration, errors, and logging setup
//! - `commands`: the CLI and HTTP callers built on the responder
//!
//! ```rust
//! use solace::responder::{Category, Responder, ResponderOptions};
//!
//! let mut bot = Responder::new(ResponderOptions::deterministic());
//! let reply = bot.respond("hi");
//! assert_eq!(reply.category, Category::Greeting);
//! ```
//!
pub mod commands;
pub mod core;
pub mod responder;
