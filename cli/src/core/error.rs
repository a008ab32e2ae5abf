//! # Solace Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Error types for the layers around the responder. The responder itself
//! never fails; configuration loading, argument handling and the HTTP
//! endpoint can.
//!
//! ## Architecture
//!
//! - `SolaceError`: a `thiserror` enum for the failures we want to name
//! - `Result<T>`: an alias for `anyhow::Result<T>` so handlers can add context
//!
//! ## Examples
//!
//! ```rust
//! use solace::core::error::{Result, SolaceError};
//!
//! fn check_port(port: u16) -> Result<u16> {
//!     if port == 0 {
//!         return Err(SolaceError::Config("server.port must not be 0".into()).into());
//!     }
//!     Ok(port)
//! }
//!
//! let err = check_port(0).unwrap_err();
//! assert!(matches!(err.downcast_ref::<SolaceError>(), Some(SolaceError::Config(_))));
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Solace application.
#[derive(Error, Debug)]
pub enum SolaceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
