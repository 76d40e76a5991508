//! Computer opponents.

use playlab_gamekit::{EngineError, ErasedEngine, SeededRandom};
use serde_json::Value;
use tracing::{debug, instrument};

/// Opponent that plays a uniformly random legal action.
///
/// Owns its own generator so its choices never disturb the engine's
/// random stream; the same seed always yields the same choices.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: SeededRandom,
}

impl RandomPlayer {
    /// Creates a player whose choices are fixed by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRandom::new(seed),
        }
    }

    /// Picks an action for `player_id`, or `None` when it has no legal move.
    #[instrument(skip(self, engine, state), fields(game_id = engine.game_id()))]
    pub fn choose(
        &mut self,
        engine: &dyn ErasedEngine,
        state: &Value,
        player_id: &str,
    ) -> Result<Option<Value>, EngineError> {
        let actions = engine.valid_actions(state, player_id)?;
        let choice = self.rng.pick(&actions).ok().cloned();
        debug!(options = actions.len(), ?choice, "Random player chose");
        Ok(choice)
    }
}
