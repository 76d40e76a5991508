//! Replay logs: a seed, the seats and every accepted action, in order.
//!
//! Engines are deterministic, so a log is enough to rebuild any game.
//!
//! ```json
//! {
//!   "game": "tictactoe",
//!   "seed": 42,
//!   "playerIds": ["alice", "bob"],
//!   "actions": [{ "playerId": "alice", "action": { "type": "place", "position": 4 } }]
//! }
//! ```

use crate::session::GameSession;
use derive_getters::Getters;
use derive_more::{Display, Error};
use playlab_gamekit::{EngineError, EngineRegistry, GameConfig, PlayerId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// One accepted action.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayEntry {
    player_id: PlayerId,
    action: Value,
}

/// Everything needed to reproduce a game.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayLog {
    game: String,
    seed: u32,
    player_ids: Vec<PlayerId>,
    #[serde(default)]
    actions: Vec<ReplayEntry>,
}

impl ReplayLog {
    /// Starts an empty log for a game set up from `config`.
    pub fn new(game: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            game: game.into(),
            seed: *config.seed(),
            player_ids: config.player_ids().clone(),
            actions: Vec::new(),
        }
    }

    /// Appends an accepted action.
    pub fn push(&mut self, player_id: impl Into<PlayerId>, action: Value) {
        self.actions.push(ReplayEntry {
            player_id: player_id.into(),
            action,
        });
    }

    /// Setup the log was recorded with.
    pub fn config(&self) -> GameConfig {
        GameConfig::new(self.seed, self.player_ids.clone())
    }

    /// Reads a log from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ReplayError::new(format!("Failed to read replay file: {}", e)))?;
        let log: Self = serde_json::from_str(&content)
            .map_err(|e| ReplayError::new(format!("Failed to parse replay file: {}", e)))?;
        debug!(game = %log.game, moves = log.actions.len(), "Replay log loaded");
        Ok(log)
    }

    /// Writes the log as pretty-printed JSON.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), ReplayError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReplayError::new(format!("Failed to encode replay: {}", e)))?;
        std::fs::write(path.as_ref(), json + "\n")
            .map_err(|e| ReplayError::new(format!("Failed to write replay file: {}", e)))?;
        info!(moves = self.actions.len(), "Replay log written");
        Ok(())
    }

    /// Rebuilds the game by re-applying every action from a fresh setup.
    ///
    /// # Errors
    ///
    /// Fails if the game is unknown, setup fails, or any action is
    /// rejected; a rejected action is reported with its 1-based step.
    #[instrument(skip(self, registry), fields(game = %self.game, moves = self.actions.len()))]
    pub fn replay<'r>(&self, registry: &'r EngineRegistry) -> Result<GameSession<'r>, ReplayError> {
        let mut session = GameSession::start(registry, &self.game, self.config())
            .map_err(|e| ReplayError::new(format!("Failed to set up game: {}", e)))?;

        for (index, entry) in self.actions.iter().enumerate() {
            let step = index + 1;
            session
                .play(entry.action.clone(), &entry.player_id)
                .map_err(|e: EngineError| {
                    warn!(step, player_id = %entry.player_id, error = %e, "Replay diverged");
                    ReplayError::at_step(step, e.to_string())
                })?;
        }

        info!("Replay complete");
        Ok(session)
    }
}

/// Replay error.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error{}: {} at {}:{}", step_suffix(step), message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// 1-based step of the rejected action, if any.
    pub step: Option<usize>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

fn step_suffix(step: &Option<usize>) -> String {
    step.map(|s| format!(" at step {}", s)).unwrap_or_default()
}

impl ReplayError {
    /// Creates an error not tied to a particular step.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            step: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates an error for the action at `step`.
    #[track_caller]
    pub fn at_step(step: usize, message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            step: Some(step),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
