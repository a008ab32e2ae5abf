//! # Solace Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Solace CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and routing to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Talk in the terminal
//! solace chat
//!
//! # One reply, as JSON, reproducibly
//! solace --deterministic ask --json "I can't sleep"
//!
//! # Serve the HTTP chat endpoint with verbose logging
//! solace -vv srv --port 8080
//! ```
//!
use clap::Parser;
use solace::commands;
use solace::core::config::{self, ConfigOverrides};
use solace::core::logging;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "solace",
    about = "Solace: a rule-based grief support responder",
    long_about = "Responds to short messages about grief with supportive replies.\n\
                  Crisis language is always answered first with crisis resources.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use this configuration file instead of the user and project files.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,

    /// Always pick the first unused reply (reproducible output).
    #[arg(long, global = true, env = "SOLACE_DETERMINISTIC")]
    deterministic: bool,

    /// Seed for reply selection.
    #[arg(long, global = true, env = "SOLACE_SEED")]
    seed: Option<u64>,

    /// Region hint for crisis resources.
    #[arg(long, global = true, env = "SOLACE_LOCALE")]
    locale: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Answer a single message.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Start an interactive conversation.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Run the sample messages through a deterministic responder.
    Demo,
    /// Serve the HTTP chat endpoint.
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Arguments can carry the user's message, so only the command name is logged.
    tracing::debug!(
        "Running '{}' command (deterministic: {}, seed set: {})",
        cli.command.name(),
        cli.deterministic,
        cli.seed.is_some()
    );

    let overrides = ConfigOverrides {
        config_path: cli.config,
        deterministic: cli.deterministic,
        seed: cli.seed,
        locale_hint: cli.locale,
    };

    let command_result = run(cli.command, &overrides).await;

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Ask(_) => "ask",
            Commands::Chat(_) => "chat",
            Commands::Demo => "demo",
            Commands::Srv(_) => "srv",
        }
    }
}

/// Loads the configuration and dispatches to the command handler.
async fn run(command: Commands, overrides: &ConfigOverrides) -> anyhow::Result<()> {
    let cfg = config::load_config(overrides)?;
    match command {
        Commands::Ask(args) => commands::ask::handle_ask(args, &cfg),
        Commands::Chat(args) => commands::chat::handle_chat(args, &cfg),
        Commands::Demo => commands::demo::handle_demo(&cfg),
        Commands::Srv(args) => commands::srv::handle_srv(args, &cfg).await,
    }
}
