//! Configuration loading and typed config structures for the scoreboard.
//!
//! The canonical configuration lives in `benchboard-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads and validates
//! the file. The team directory -- the static mapping from submitted
//! team identifier to display name -- is part of this configuration.

use std::collections::BTreeMap;
use std::path::Path;

use benchboard_types::TeamDirectory;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level scoreboard configuration.
///
/// Mirrors the structure of `benchboard-config.yaml`. All fields have
/// defaults so a missing section falls back to something serviceable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoardConfig {
    /// HTTP bind settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Scoring behavior settings.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Mapping from submitted team identifier to display name.
    #[serde(default)]
    pub teams: BTreeMap<String, String>,
}

impl BoardConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `DATABASE_URL` overrides `database.url`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.database.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.database.apply_env_overrides();
        Ok(config)
    }

    /// Build the immutable team directory injected into the aggregators.
    pub fn team_directory(&self) -> TeamDirectory {
        TeamDirectory::new(self.teams.clone())
    }
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Apply environment-variable overrides to the parsed values.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.url = url;
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

/// Scoring behavior settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScoringConfig {
    /// Start with the score freeze active.
    ///
    /// The operator endpoints can flip this at runtime; the config
    /// value only seeds the initial state.
    #[serde(default)]
    pub frozen: bool,
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    String::from("sqlite://benchboard.db")
}

const fn default_max_connections() -> u32 {
    5
}
