//! # Solace Demo Command
//!
//! File: cli/src/commands/demo.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! Runs a fixed set of sample messages through a deterministic responder and
//! prints what each one was classified as. The output is identical on every
//! run, which makes it handy for checking pattern changes by eye.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::responder::{Responder, ResponderOptions};
use std::io::Write;
use tracing::info;

/// Sample messages covering a greeting, several categories, a crisis and an advice request.
pub const SAMPLE_MESSAGES: &[&str] = &[
    "hi",
    "I feel exhausted and can’t sleep",
    "today is his birthday and I miss him",
    "I feel so guilty, I should have done more",
    "Honestly, I don't want to live like this",
    "any tip to help right now?",
];

/// Entry point for `solace demo`.
pub fn handle_demo(config: &Config) -> Result<()> {
    info!("Running demo with {} sample messages", SAMPLE_MESSAGES.len());
    let options = ResponderOptions {
        deterministic: true,
        ..config.responder.clone()
    };
    let stdout = std::io::stdout();
    write_demo(&mut Responder::new(options), &mut stdout.lock())
}

fn write_demo<W: Write>(responder: &mut Responder, out: &mut W) -> Result<()> {
    for message in SAMPLE_MESSAGES {
        let reply = responder.respond(message);
        writeln!(out, "> {}", message)?;
        writeln!(out, "  category: {}", reply.category)?;
        writeln!(out, "  matched:  {}", reply.matched_terms)?;
        writeln!(out, "  reply:    {}", reply.text)?;
        writeln!(out)?;
    }
    Ok(())
}
