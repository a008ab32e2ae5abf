//! # Solace Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! The commands are thin callers of the responder. Each one owns its own
//! transport (terminal, one-shot output, HTTP) and decides how many
//! `Responder` instances it needs. None of them stores conversation text.
//!
//! ## Command Groups
//!
//! - `ask`: answer a single message and exit
//! - `chat`: interactive conversation in the terminal
//! - `demo`: run the sample phrases through a deterministic responder
//! - `srv`: HTTP chat endpoint with one responder per session
//!

/// One-shot reply to a message given on the command line.
pub mod ask;
/// Interactive terminal conversation.
pub mod chat;
/// Walkthrough of the sample phrases.
pub mod demo;
/// HTTP chat endpoint.
pub mod srv;
