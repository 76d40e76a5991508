//! The contract every turn-based game engine satisfies.
//!
//! Engines are pure: they hold no per-game state, every operation takes the
//! state by reference and transitions return a fresh value. A UI renders
//! from one state while the next one is computed without any locking.

use crate::error::{InvalidActionError, SetupError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Opaque player identifier.
pub type PlayerId = String;

/// Parameters for building an initial state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Seed recorded in the state for replay; engines with randomized
    /// setup draw from a [`SeededRandom`](crate::SeededRandom) built on it.
    seed: u32,
    /// Seats in turn order.
    player_ids: Vec<PlayerId>,
}

/// A deterministic state-transition engine for one game.
///
/// Driven externally as `init -> {is_valid_action, apply_action}*`.
/// Implementations must keep `is_valid_action` and `apply_action` in
/// agreement: `apply_action` fails exactly when the predicate is false.
pub trait GameEngine {
    /// Immutable snapshot of a game in progress.
    type State: Clone + Debug + PartialEq;
    /// Player-submitted intent.
    type Action: Clone + Debug + PartialEq;

    /// Stable identifier used by the registry.
    fn game_id(&self) -> &'static str;

    /// Builds the initial state.
    fn init(&self, config: &GameConfig) -> Result<Self::State, SetupError>;

    /// Pure predicate: can `player_id` play `action` in `state`?
    fn is_valid_action(&self, state: &Self::State, action: &Self::Action, player_id: &str)
    -> bool;

    /// Returns the successor state, leaving `state` untouched.
    fn apply_action(
        &self,
        state: &Self::State,
        action: &Self::Action,
        player_id: &str,
    ) -> Result<Self::State, InvalidActionError>;

    /// Every action `player_id` may play now, in a stable order.
    fn valid_actions(&self, state: &Self::State, player_id: &str) -> Vec<Self::Action>;

    /// What `player_id` is allowed to see. Must be a pure function of its inputs.
    fn player_view(&self, state: &Self::State, player_id: &str) -> Self::State;

    /// Whether the state is terminal.
    fn is_game_over(&self, state: &Self::State) -> bool;

    /// Winners once decided; `None` while running or after a draw.
    fn winners<'a>(&self, state: &'a Self::State) -> Option<&'a [PlayerId]>;

    /// Player to move (frozen on the last mover once the game is over).
    fn current_player<'a>(&self, state: &'a Self::State) -> &'a str;

    /// Cell indices of the line that decided the game, for games that have one.
    fn winning_line(&self, _state: &Self::State) -> Option<Vec<usize>> {
        None
    }
}
