//! Game configuration loaded from TOML and overridden by CLI flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};
use turnwise_tictactoe::MatchSettings;

/// Configuration for a console session.
///
/// ```toml
/// player_name = "Ada"
///
/// [match]
/// target_score = 3
/// first_marker = "X"
/// center_priority = true
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
pub struct GameConfig {
    /// Player name; prompted for when absent.
    #[serde(default)]
    player_name: Option<String>,

    /// Settings for every match in the session.
    #[serde(default, rename = "match")]
    match_settings: MatchSettings,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.match_settings.target_score == 0 {
            return Err(ConfigError::new("target_score must be at least 1"));
        }
        info!(target = config.match_settings.target_score, "Config loaded");
        Ok(config)
    }

    /// Builds the session config: file values (if any), then CLI overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(name) = &cli.name {
            config.player_name = Some(name.clone());
        }
        let settings = &mut config.match_settings;
        if let Some(target) = cli.target {
            if target == 0 {
                return Err(ConfigError::new("--target must be at least 1"));
            }
            settings.target_score = target;
        }
        if let Some(seed) = cli.seed {
            settings.seed = Some(seed);
        }
        if let Some(first) = cli.first {
            settings.first_marker = Some(first);
        }
        if cli.no_center {
            settings.center_priority = false;
        }
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Replaces the match settings.
    pub fn with_match_settings(mut self, settings: MatchSettings) -> Self {
        self.match_settings = settings;
        self
    }

    /// Replaces the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
