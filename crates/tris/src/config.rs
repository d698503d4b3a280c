//! Player and logging configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use tris_core::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameSession};

/// Settings read from `tris.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TrisConfig {
    /// Name of the player holding X (moves first).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the player holding O.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_one() -> String {
    DEFAULT_PLAYER_ONE.to_string()
}

fn default_player_two() -> String {
    DEFAULT_PLAYER_TWO.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tris.log")
}

impl Default for TrisConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            log_file: default_log_file(),
        }
    }
}

impl TrisConfig {
    /// Creates a configuration with the given player names.
    #[instrument(skip(player_one, player_two))]
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
            ..Self::default()
        }
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from `path`, or defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Starts a fresh session for the configured players.
    pub fn new_session(&self) -> GameSession {
        GameSession::new(&self.player_one, &self.player_two)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be blank".to_string()));
        }
        Ok(())
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TrisConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, TrisConfig::default());
        assert_eq!(config.player_one(), "Player 1");
        assert_eq!(config.log_file(), &PathBuf::from("tris.log"));
    }

    #[test]
    fn test_partial_toml() {
        let config = TrisConfig::from_toml("player_two = \"Grace\"").expect("parses");
        assert_eq!(config.player_one(), "Player 1");
        assert_eq!(config.player_two(), "Grace");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = TrisConfig::from_toml("player_one = \"   \"").unwrap_err();
        assert!(err.message.contains("blank"), "{err}");
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = TrisConfig::from_toml("player_one = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"), "{err}");
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_new_session_uses_names() {
        let session = TrisConfig::new("Ada", "Grace").new_session();
        assert_eq!(session.players()[0].name(), "Ada");
        assert_eq!(session.players()[1].name(), "Grace");
    }
}
