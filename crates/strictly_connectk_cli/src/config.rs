//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_connectk::{
    DEFAULT_BOARD_SIZE, GameSession, MAX_BOARD_SIZE, MIN_BOARD_SIZE, SessionError,
};
use tracing::{debug, info, instrument};

/// Preferences applied to new sessions.
///
/// Every key is optional in the file:
///
/// ```toml
/// default_size = 10
/// sort_ascending = false
/// log_filter = "strictly_connectk=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size used when none is given on the command line.
    #[serde(default = "default_size")]
    default_size: usize,

    /// Whether the move list starts oldest first.
    #[serde(default = "default_sort_ascending")]
    sort_ascending: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_size() -> usize {
    DEFAULT_BOARD_SIZE
}

#[instrument]
fn default_sort_ascending() -> bool {
    true
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl GameConfig {
    /// Creates a configuration with default values.
    #[instrument]
    pub fn new() -> Self {
        Self {
            default_size: default_size(),
            sort_ascending: default_sort_ascending(),
            log_filter: default_log_filter(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(default_size = config.default_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.default_size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "default_size {} is below the minimum of {}",
                config.default_size, MIN_BOARD_SIZE
            )));
        }
        if config.default_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "default_size {} is above the maximum of {}",
                config.default_size, MAX_BOARD_SIZE
            )));
        }

        Ok(config)
    }

    /// Starts a session using `size` if given, otherwise the configured size.
    #[instrument(skip(self))]
    pub fn new_session(&self, size: Option<usize>) -> Result<GameSession, SessionError> {
        let mut session = GameSession::new(size.unwrap_or(self.default_size))?;
        if !self.sort_ascending {
            session.toggle_sort_order();
        }
        Ok(session)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
