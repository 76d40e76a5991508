//! Local game sessions over type-erased engines.

use crate::replay::ReplayLog;
use playlab_gamekit::{EngineError, EngineRegistry, ErasedEngine, GameConfig, PlayerId};
use serde_json::Value;
use tracing::{debug, info, instrument};

/// One running game: the engine, its current state and the moves so far.
///
/// Every accepted action is appended to the session's [`ReplayLog`];
/// rejected actions leave both the state and the log untouched.
pub struct GameSession<'r> {
    engine: &'r dyn ErasedEngine,
    state: Value,
    log: ReplayLog,
}

impl<'r> GameSession<'r> {
    /// Starts a new game of `game_id` from `config`.
    #[instrument(skip(registry, config), fields(seed = *config.seed()))]
    pub fn start(
        registry: &'r EngineRegistry,
        game_id: &str,
        config: GameConfig,
    ) -> Result<Self, EngineError> {
        let engine = registry.get(game_id)?;
        let state = engine.init(&config)?;
        info!(game_id, players = ?config.player_ids(), "Game session started");
        Ok(Self {
            engine,
            state,
            log: ReplayLog::new(game_id, &config),
        })
    }

    /// Applies `action` on behalf of `player_id`.
    #[instrument(skip(self, action), fields(game_id = self.engine.game_id()))]
    pub fn play(&mut self, action: Value, player_id: &str) -> Result<(), EngineError> {
        let next = self.engine.apply_action(&self.state, &action, player_id)?;
        debug!(%action, "Action accepted");
        self.state = next;
        self.log.push(player_id, action);
        Ok(())
    }

    /// Engine driving this session.
    pub fn engine(&self) -> &'r dyn ErasedEngine {
        self.engine
    }

    /// Current state as JSON.
    pub fn state(&self) -> &Value {
        &self.state
    }

    /// Moves played so far.
    pub fn log(&self) -> &ReplayLog {
        &self.log
    }

    /// Consumes the session, returning its log.
    pub fn into_log(self) -> ReplayLog {
        self.log
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> Result<bool, EngineError> {
        self.engine.is_game_over(&self.state)
    }

    /// Player to move.
    pub fn current_player(&self) -> Result<PlayerId, EngineError> {
        self.engine.current_player(&self.state)
    }

    /// Winners once the game is over.
    pub fn winners(&self) -> Result<Option<Vec<PlayerId>>, EngineError> {
        self.engine.winners(&self.state)
    }

    /// Cell indices of the deciding line, if the game has one.
    pub fn winning_line(&self) -> Result<Option<Vec<usize>>, EngineError> {
        self.engine.winning_line(&self.state)
    }

    /// Legal actions for `player_id`.
    pub fn valid_actions(&self, player_id: &str) -> Result<Vec<Value>, EngineError> {
        self.engine.valid_actions(&self.state, player_id)
    }
}

impl std::fmt::Debug for GameSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game_id", &self.engine.game_id())
            .field("state", &self.state)
            .field("moves", &self.log.actions().len())
            .finish()
    }
}
