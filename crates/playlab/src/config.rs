//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use playlab_gamekit::PlayerId;
use playlab_tictactoe::TicTacToeEngine;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Environment variable overriding [`PlaylabConfig::default_seed`].
pub const SEED_ENV_VAR: &str = "PLAYLAB_SEED";

/// Settings for local play and tooling, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlaylabConfig {
    /// Game used when none is given on the command line.
    #[serde(default = "default_game")]
    default_game: String,

    /// Seed used when none is given on the command line.
    #[serde(default = "default_seed")]
    default_seed: u32,

    /// Seats used when none are given on the command line.
    #[serde(default = "default_player_ids")]
    player_ids: Vec<PlayerId>,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_game() -> String {
    TicTacToeEngine::GAME_ID.to_string()
}

fn default_seed() -> u32 {
    42
}

fn default_player_ids() -> Vec<PlayerId> {
    vec!["player1".to_string(), "player2".to_string()]
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for PlaylabConfig {
    fn default() -> Self {
        Self {
            default_game: default_game(),
            default_seed: default_seed(),
            player_ids: default_player_ids(),
            log_filter: default_log_filter(),
        }
    }
}

impl PlaylabConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(game = %config.default_game, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies a raw [`SEED_ENV_VAR`] value; unparsable values are ignored.
    #[instrument(skip(self))]
    pub fn with_seed_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.trim().parse::<u32>() {
                Ok(seed) => {
                    debug!(seed, "Seed overridden from environment");
                    self.default_seed = seed;
                }
                Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", SEED_ENV_VAR),
            }
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
