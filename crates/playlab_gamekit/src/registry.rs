//! Type-erased engines and the game-id registry.
//!
//! The registry lets hosts pick an engine by id at runtime (from a replay
//! log, a CLI flag or a route parameter) without knowing its concrete state
//! and action types. States and actions cross this boundary as JSON values.

use crate::engine::{GameConfig, GameEngine, PlayerId};
use crate::error::{EngineError, InvalidActionError, UnknownGameError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Object-safe view of a [`GameEngine`] over JSON states and actions.
///
/// Blanket-implemented for every engine whose types are serde-capable.
/// An action that does not decode is an invalid action, never a panic.
pub trait ErasedEngine: Send + Sync {
    /// Stable identifier of the game.
    fn game_id(&self) -> &'static str;
    /// See [`GameEngine::init`].
    fn init(&self, config: &GameConfig) -> Result<Value, EngineError>;
    /// See [`GameEngine::is_valid_action`].
    fn is_valid_action(&self, state: &Value, action: &Value, player_id: &str) -> bool;
    /// See [`GameEngine::apply_action`].
    fn apply_action(
        &self,
        state: &Value,
        action: &Value,
        player_id: &str,
    ) -> Result<Value, EngineError>;
    /// See [`GameEngine::valid_actions`].
    fn valid_actions(&self, state: &Value, player_id: &str) -> Result<Vec<Value>, EngineError>;
    /// See [`GameEngine::player_view`].
    fn player_view(&self, state: &Value, player_id: &str) -> Result<Value, EngineError>;
    /// See [`GameEngine::is_game_over`].
    fn is_game_over(&self, state: &Value) -> Result<bool, EngineError>;
    /// See [`GameEngine::winners`].
    fn winners(&self, state: &Value) -> Result<Option<Vec<PlayerId>>, EngineError>;
    /// See [`GameEngine::current_player`].
    fn current_player(&self, state: &Value) -> Result<PlayerId, EngineError>;
    /// See [`GameEngine::winning_line`].
    fn winning_line(&self, state: &Value) -> Result<Option<Vec<usize>>, EngineError>;
}

fn decode_state<S: DeserializeOwned>(state: &Value) -> Result<S, EngineError> {
    S::deserialize(state).map_err(|e| EngineError::MalformedState(e.to_string()))
}

fn encode<T: Serialize>(value: &T) -> Result<Value, EngineError> {
    serde_json::to_value(value).map_err(|e| EngineError::MalformedState(e.to_string()))
}

impl<E> ErasedEngine for E
where
    E: GameEngine + Send + Sync,
    E::State: Serialize + DeserializeOwned,
    E::Action: Serialize + DeserializeOwned,
{
    fn game_id(&self) -> &'static str {
        GameEngine::game_id(self)
    }

    fn init(&self, config: &GameConfig) -> Result<Value, EngineError> {
        let state = GameEngine::init(self, config)?;
        encode(&state)
    }

    fn is_valid_action(&self, state: &Value, action: &Value, player_id: &str) -> bool {
        let (Ok(state), Ok(action)) = (
            E::State::deserialize(state),
            E::Action::deserialize(action),
        ) else {
            return false;
        };
        GameEngine::is_valid_action(self, &state, &action, player_id)
    }

    fn apply_action(
        &self,
        state: &Value,
        action: &Value,
        player_id: &str,
    ) -> Result<Value, EngineError> {
        let state: E::State = decode_state(state)?;
        let action = E::Action::deserialize(action).map_err(|e| {
            InvalidActionError::new(format!("unrecognized action: {}", e), player_id)
        })?;
        let next = GameEngine::apply_action(self, &state, &action, player_id)?;
        encode(&next)
    }

    fn valid_actions(&self, state: &Value, player_id: &str) -> Result<Vec<Value>, EngineError> {
        let state: E::State = decode_state(state)?;
        GameEngine::valid_actions(self, &state, player_id)
            .iter()
            .map(encode)
            .collect()
    }

    fn player_view(&self, state: &Value, player_id: &str) -> Result<Value, EngineError> {
        let state: E::State = decode_state(state)?;
        encode(&GameEngine::player_view(self, &state, player_id))
    }

    fn is_game_over(&self, state: &Value) -> Result<bool, EngineError> {
        let state: E::State = decode_state(state)?;
        Ok(GameEngine::is_game_over(self, &state))
    }

    fn winners(&self, state: &Value) -> Result<Option<Vec<PlayerId>>, EngineError> {
        let state: E::State = decode_state(state)?;
        Ok(GameEngine::winners(self, &state).map(<[PlayerId]>::to_vec))
    }

    fn current_player(&self, state: &Value) -> Result<PlayerId, EngineError> {
        let state: E::State = decode_state(state)?;
        Ok(GameEngine::current_player(self, &state).to_string())
    }

    fn winning_line(&self, state: &Value) -> Result<Option<Vec<usize>>, EngineError> {
        let state: E::State = decode_state(state)?;
        Ok(GameEngine::winning_line(self, &state))
    }
}

/// Mapping from game id to engine.
#[derive(Default)]
pub struct EngineRegistry {
    engines: BTreeMap<String, Box<dyn ErasedEngine>>,
}

impl EngineRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an engine under its own game id, replacing any previous one.
    #[instrument(skip(self, engine))]
    pub fn register<E: ErasedEngine + 'static>(&mut self, engine: E) {
        let id = engine.game_id().to_string();
        info!(game_id = %id, "Registering game engine");
        self.engines.insert(id, Box::new(engine));
    }

    /// Looks up an engine by id.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownGameError`] when nothing is registered under `game_id`.
    #[instrument(skip(self))]
    pub fn get(&self, game_id: &str) -> Result<&dyn ErasedEngine, UnknownGameError> {
        debug!(game_id, "Looking up game engine");
        self.engines
            .get(game_id)
            .map(|engine| engine.as_ref())
            .ok_or_else(|| UnknownGameError::new(game_id))
    }

    /// Registered ids in sorted order.
    pub fn game_ids(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("games", &self.engines.keys().collect::<Vec<_>>())
            .finish()
    }
}
