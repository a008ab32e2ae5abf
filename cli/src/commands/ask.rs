//! # Solace Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! Answers one message and exits. The words after `ask` are joined with
//! spaces, so quoting is optional:
//!
//! ```bash
//! solace ask I miss him so much
//! solace ask --json "any tip to help right now?"
//! ```
//!
//! With `--json` the full reply (`text`, `category`, `matched_terms`) is
//! printed as a single JSON object.
//!
use crate::core::config::Config;
use crate::core::error::{Result, SolaceError};
use crate::responder::Responder;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing::info;

/// Arguments for `solace ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to respond to.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Print the reply as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Entry point for `solace ask`.
pub fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    info!("Handling ask command");
    let mut responder = Responder::new(config.responder.clone());
    let stdout = std::io::stdout();
    write_answer(&mut responder, &args, &mut stdout.lock())
}

fn write_answer<W: Write>(responder: &mut Responder, args: &AskArgs, out: &mut W) -> Result<()> {
    let message = args.message.join(" ");
    if message.trim().is_empty() {
        return Err(SolaceError::InvalidInput("Message must not be empty.".into()).into());
    }

    let reply = responder.respond(&message);
    if args.json {
        let json = serde_json::to_string(&reply).context("Failed to serialize reply")?;
        writeln!(out, "{}", json)?;
    } else {
        writeln!(out, "{}", reply.text)?;
    }
    Ok(())
}
