//! # Solace Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! A read-eval-print loop in the terminal. One `Responder` lives for the
//! whole session, so replies rotate instead of repeating.
//!
//! - `bye`, `quit` or `exit` (any case) ends the conversation, as does EOF
//! - blank lines are skipped without calling the responder
//! - `--show-category` prints the category and matched terms under each reply
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::responder::Responder;
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const FAREWELL: &str = "Take gentle care of yourself. I'm here whenever you want to talk again.";

/// Arguments for `solace chat`.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Show the category and matched terms under each reply.
    #[arg(long)]
    pub show_category: bool,
}

/// Entry point for `solace chat`.
pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Starting interactive chat session");
    let mut responder = Responder::new(config.responder.clone());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_chat(
        &mut responder,
        &config.server.bot_name,
        args.show_category,
        stdin.lock(),
        &mut stdout.lock(),
    )
}

fn is_exit_command(line: &str) -> bool {
    ["bye", "quit", "exit"]
        .iter()
        .any(|cmd| line.eq_ignore_ascii_case(cmd))
}

/// Runs the conversation loop over arbitrary input/output streams.
pub fn run_chat<R: BufRead, W: Write>(
    responder: &mut Responder,
    bot_name: &str,
    show_category: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Chat with {}. Type 'bye' to quit.", bot_name)?;
    let mut lines = input.lines();
    let mut turns = 0usize;

    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if is_exit_command(trimmed) {
            writeln!(out, "{}: {}", bot_name, FAREWELL)?;
            break;
        }

        let reply = responder.respond(trimmed);
        turns += 1;
        writeln!(out, "{}: {}", bot_name, reply.text)?;
        if show_category {
            writeln!(out, "  [{}] {}", reply.category, reply.matched_terms)?;
        }
    }

    debug!("Chat session ended after {} turns", turns);
    Ok(())
}
