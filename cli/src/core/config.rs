//! # Solace Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Loads, merges and validates the settings for the responder and the HTTP
//! chat endpoint. Every field has a built-in default, so Solace runs without
//! any configuration file at all.
//!
//! ## Architecture
//!
//! Configuration sources (lowest to highest precedence):
//! 1. Default values defined in the code
//! 2. User-specific `config.toml` in the platform config dir
//!    (e.g. `~/.config/solace/config.toml`)
//! 3. Project-specific `.solace.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 4. An explicit `--config <path>`, which replaces sources 2 and 3
//! 5. Command-line flags and `SOLACE_*` environment variables
//!
//! Files only need to name the settings they change:
//!
//! ```toml
//! [responder]
//! deterministic = false
//! locale_hint = "US/CA"
//! seed = 42
//!
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//! enable_cors = true
//! max_sessions = 1024
//! bot_name = "Solace"
//! ```
//!
//! The configuration is loaded once per command execution and passed to the
//! command that needs it.
//!
use crate::core::error::{Result, SolaceError};
use crate::responder::ResponderOptions;
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".solace.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub responder: ResponderOptions,
    pub server: ServerSettings,
}

/// Settings for `solace srv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Upper bound on concurrently tracked chat sessions.
    pub max_sessions: usize,
    /// Name shown as the speaker of bot messages.
    pub bot_name: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            enable_cors: true,
            max_sessions: 1024,
            bot_name: "Solace".to_string(),
        }
    }
}

/// One configuration file. Every field is optional so a file only overrides
/// what it names.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub responder: ResponderFileConfig,
    #[serde(default)]
    pub server: ServerFileConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResponderFileConfig {
    pub deterministic: Option<bool>,
    pub locale_hint: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerFileConfig {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub enable_cors: Option<bool>,
    pub max_sessions: Option<usize>,
    pub bot_name: Option<String>,
}

/// Values taken from the command line (or `SOLACE_*` variables).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<String>,
    pub deterministic: bool,
    pub seed: Option<u64>,
    pub locale_hint: Option<String>,
}

impl Config {
    /// Applies one file layer on top of the current values.
    pub fn apply_file(&mut self, file: FileConfig) {
        let r = file.responder;
        if let Some(deterministic) = r.deterministic {
            self.responder.deterministic = deterministic;
        }
        if let Some(locale_hint) = r.locale_hint {
            self.responder.locale_hint = locale_hint;
        }
        if r.seed.is_some() {
            self.responder.seed = r.seed;
        }

        let s = file.server;
        if let Some(host) = s.host {
            self.server.host = host;
        }
        if let Some(port) = s.port {
            self.server.port = port;
        }
        if let Some(enable_cors) = s.enable_cors {
            self.server.enable_cors = enable_cors;
        }
        if let Some(max_sessions) = s.max_sessions {
            self.server.max_sessions = max_sessions;
        }
        if let Some(bot_name) = s.bot_name {
            self.server.bot_name = bot_name;
        }
    }

    /// Applies command-line values. A `--deterministic` flag can only turn
    /// deterministic mode on, never off.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if overrides.deterministic {
            self.responder.deterministic = true;
        }
        if overrides.seed.is_some() {
            self.responder.seed = overrides.seed;
        }
        if let Some(locale_hint) = &overrides.locale_hint {
            self.responder.locale_hint = locale_hint.clone();
        }
    }
}

/// Loads the effective configuration for this run.
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = Config::default();

    if let Some(raw_path) = &overrides.config_path {
        let path = expand_path(raw_path);
        if !path.is_file() {
            return Err(SolaceError::Config(format!(
                "Configuration file '{}' does not exist.",
                path.display()
            ))
            .into());
        }
        info!("Loading configuration from: {}", path.display());
        config.apply_file(load_config_from_path(&path)?);
    } else {
        if let Some(user) = load_user_config()? {
            config.apply_file(user);
        }
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        if let Some(project_path) = find_project_config_path(&current_dir) {
            info!(
                "Loading project configuration from: {}",
                project_path.display()
            );
            config.apply_file(load_config_from_path(&project_path)?);
        } else {
            debug!("No project configuration file ({}) found.", PROJECT_CONFIG_FILENAME);
        }
    }

    config.apply_overrides(overrides);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<FileConfig>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Solace", "solace") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

/// Walks up from `start` looking for `.solace.toml`; stops at a `.git` directory.
pub fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

/// Reads and parses one TOML configuration file.
pub fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content).map_err(|source| {
        anyhow::Error::from(SolaceError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Expands a leading `~` to the home directory.
fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.responder.locale_hint.trim().is_empty() {
        return Err(SolaceError::Config("responder.locale_hint must not be empty.".into()).into());
    }
    if config.server.max_sessions == 0 {
        return Err(SolaceError::Config("server.max_sessions must be at least 1.".into()).into());
    }
    if config.server.bot_name.trim().is_empty() {
        return Err(SolaceError::Config("server.bot_name must not be empty.".into()).into());
    }
    if config.responder.deterministic && config.responder.seed.is_some() {
        warn!("Both deterministic mode and a seed are set; the seed is ignored.");
    }
    Ok(())
}
