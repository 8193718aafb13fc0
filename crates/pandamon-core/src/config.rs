//! Configuration management for pandamon.
//!
//! Loads configuration from ${PANDAMON_HOME}/config.toml with sensible
//! defaults. The file is read-only at runtime; `init` writes the commented
//! template once.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_ENDPOINT;

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Status endpoint to query.
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

/// Resolves the status endpoint with precedence: env > CLI/config > default.
///
/// # Errors
/// Returns an error when the winning value is not a well-formed URL.
pub fn resolve_endpoint(config_endpoint: &str) -> Result<String> {
    if let Ok(env_url) = std::env::var("PANDAMON_ENDPOINT") {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.to_string());
        }
    }

    let trimmed = config_endpoint.trim();
    if !trimmed.is_empty() {
        validate_url(trimmed)?;
        return Ok(trimmed.to_string());
    }

    Ok(DEFAULT_ENDPOINT.to_string())
}

/// Validates that a URL is well-formed.
fn validate_url(raw: &str) -> Result<()> {
    url::Url::parse(raw).with_context(|| format!("Invalid status endpoint URL: {raw}"))?;
    Ok(())
}

pub mod paths {
    //! Path resolution for pandamon configuration and log directories.
    //!
    //! PANDAMON_HOME resolution order:
    //! 1. PANDAMON_HOME environment variable (if set)
    //! 2. ~/.config/pandamon (default)

    use std::path::PathBuf;

    /// Returns the pandamon home directory.
    pub fn pandamon_home() -> PathBuf {
        if let Ok(home) = std::env::var("PANDAMON_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("pandamon"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        pandamon_home().join("config.toml")
    }

    /// Returns the directory for rolling log files.
    pub fn logs_dir() -> PathBuf {
        pandamon_home().join("logs")
    }
}
