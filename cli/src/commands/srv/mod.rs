//! # Solace HTTP Chat Endpoint
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Serves the responder over HTTP so a web or mobile front-end can use it.
//! Each chat session gets its own responder; nothing a user writes is stored.
//!
//! ## Architecture
//!
//! - `config.rs`: command-line arguments and merging with `[server]` settings
//! - `handlers.rs`: request handlers and JSON bodies
//! - `sessions.rs`: bounded per-session responder store
//! - `server_logic.rs`: router, port fallback, and graceful shutdown
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the configured port (5000 by default)
//! solace srv
//!
//! # Listen on all interfaces, port 8080, without CORS headers
//! solace srv --host 0.0.0.0 --port 8080 --no-cors
//!
//! # Talk to it
//! curl -s localhost:5000/api/chat -H 'content-type: application/json' \
//!      -d '{"message": "I miss her", "session_id": "abc"}'
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Argument merging for the server.
pub mod config;

/// Request handlers.
pub mod handlers;

/// Axum server setup and lifecycle.
pub mod server_logic;

/// Per-session responders.
pub mod sessions;

/// # Handle Server Command (`handle_srv`)
///
/// Merges the arguments into the configured server settings and runs the
/// server until it is shut down.
pub async fn handle_srv(args: SrvArgs, cfg: &Config) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);
    let settings = config::merge_args(cfg.server.clone(), &args)?;
    server_logic::run_server(settings, cfg.responder.clone()).await
}
