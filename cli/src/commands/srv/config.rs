//! # Solace HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Command-line arguments for `solace srv` and how they merge with the
//! `[server]` section of the loaded configuration. Settings come from:
//! 1. Command-line arguments (highest priority, only when given)
//! 2. The `[server]` section of the configuration files
//! 3. Default values (lowest priority)
//!
use crate::core::config::ServerSettings;
use crate::core::error::{Result, SolaceError};
use clap::Parser;
use std::net::IpAddr;
use tracing::debug;

/// # Server Command Arguments (`SrvArgs`)
///
/// Every option is optional; an unset option keeps the configured value.
#[derive(Parser, Debug, Default)]
pub struct SrvArgs {
    /// Port to listen on. If busy, the next free port is used.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind. `0.0.0.0` accepts connections from other machines.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Disable Cross-Origin Resource Sharing headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Maximum number of chat sessions kept in memory.
    #[arg(long)]
    pub max_sessions: Option<usize>,
}

/// Applies `args` over `settings` and validates the result.
pub fn merge_args(mut settings: ServerSettings, args: &SrvArgs) -> Result<ServerSettings> {
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(host) = args.host {
        settings.host = host;
    }
    if args.no_cors {
        settings.enable_cors = false;
    }
    if let Some(max_sessions) = args.max_sessions {
        if max_sessions == 0 {
            return Err(
                SolaceError::InvalidInput("--max-sessions must be at least 1.".into()).into(),
            );
        }
        settings.max_sessions = max_sessions;
    }
    debug!("Effective server settings: {:?}", settings);
    Ok(settings)
}
