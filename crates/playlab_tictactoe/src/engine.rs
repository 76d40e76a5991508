//! Tic-tac-toe engine implementing the game contract.

use crate::action::{MoveRejection, TicTacToeAction};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Symbol, TicTacToeState};
use playlab_gamekit::{GameConfig, GameEngine, InvalidActionError, PlayerId, SetupError};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Stateless tic-tac-toe engine.
///
/// Seat order fixes both turn order and symbols: the first player id plays
/// `X` and moves first.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToeEngine;

impl TicTacToeEngine {
    /// Registry id of this game.
    pub const GAME_ID: &'static str = "tictactoe";

    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }

    /// Validates an action, returning the target square and the mover's mark.
    ///
    /// Both [`GameEngine::is_valid_action`] and [`GameEngine::apply_action`]
    /// go through here so they cannot disagree.
    #[instrument(skip(self, state), fields(turn = state.turn))]
    pub fn check_action(
        &self,
        state: &TicTacToeState,
        action: &TicTacToeAction,
        player_id: &str,
    ) -> Result<(Position, Symbol), MoveRejection> {
        if state.game_over {
            return Err(MoveRejection::GameOver);
        }
        if state.turn == u32::MAX {
            return Err(MoveRejection::TurnLimit);
        }
        if state.current_player_id != player_id {
            return Err(MoveRejection::WrongPlayer(player_id.to_string()));
        }
        let symbol = state
            .symbol_of(player_id)
            .ok_or_else(|| MoveRejection::UnknownPlayer(player_id.to_string()))?;

        let TicTacToeAction::Place { position } = *action;
        let pos = Position::from_raw(position).ok_or(MoveRejection::OutOfBounds(position))?;
        if !state.board.is_empty(pos) {
            return Err(MoveRejection::SquareOccupied(pos));
        }
        Ok((pos, symbol))
    }

}

impl GameEngine for TicTacToeEngine {
    type State = TicTacToeState;
    type Action = TicTacToeAction;

    fn game_id(&self) -> &'static str {
        Self::GAME_ID
    }

    #[instrument(skip(self))]
    fn init(&self, config: &GameConfig) -> Result<TicTacToeState, SetupError> {
        let [first, second]: [PlayerId; 2] =
            config.player_ids().clone().try_into().map_err(|ids: Vec<_>| {
                SetupError::new(format!(
                    "tic-tac-toe needs exactly 2 players, got {}",
                    ids.len()
                ))
            })?;
        if first == second {
            return Err(SetupError::new(format!(
                "player ids must be distinct, got '{}' twice",
                first
            )));
        }

        let symbols = BTreeMap::from([
            (first.clone(), Symbol::for_seat(0)),
            (second.clone(), Symbol::for_seat(1)),
        ]);

        info!(x = %first, o = %second, seed = config.seed(), "New tic-tac-toe game");
        Ok(TicTacToeState {
            board: Board::new(),
            current_player_id: first.clone(),
            player_ids: [first, second],
            symbols,
            game_over: false,
            winners: None,
            turn: 1,
            rng_state: *config.seed(),
        })
    }

    fn is_valid_action(
        &self,
        state: &TicTacToeState,
        action: &TicTacToeAction,
        player_id: &str,
    ) -> bool {
        self.check_action(state, action, player_id).is_ok()
    }

    #[instrument(skip(self, state), fields(turn = state.turn))]
    fn apply_action(
        &self,
        state: &TicTacToeState,
        action: &TicTacToeAction,
        player_id: &str,
    ) -> Result<TicTacToeState, InvalidActionError> {
        let (pos, symbol) = self
            .check_action(state, action, player_id)
            .map_err(|reason| InvalidActionError::new(reason.to_string(), player_id))?;

        let board = state.board.with(pos, symbol);
        let mut next = TicTacToeState {
            board,
            turn: state.turn + 1,
            ..state.clone()
        };

        if rules::has_line(&board, symbol) {
            info!(winner = %player_id, %symbol, "Game won");
            next.game_over = true;
            next.winners = Some(vec![player_id.to_string()]);
        } else if rules::is_full(&board) {
            info!("Game drawn");
            next.game_over = true;
            next.winners = None;
        } else {
            next.current_player_id = state.opponent_of(player_id).to_string();
        }

        debug!(position = %pos, next_player = %next.current_player_id, "Action applied");
        Ok(next)
    }

    fn valid_actions(&self, state: &TicTacToeState, player_id: &str) -> Vec<TicTacToeAction> {
        if state.game_over || state.current_player_id != player_id {
            return Vec::new();
        }
        Position::valid_moves(&state.board)
            .into_iter()
            .map(TicTacToeAction::from)
            .collect()
    }

    // No hidden information in tic-tac-toe.
    fn player_view(&self, state: &TicTacToeState, _player_id: &str) -> TicTacToeState {
        state.clone()
    }

    fn is_game_over(&self, state: &TicTacToeState) -> bool {
        state.game_over
    }

    fn winners<'a>(&self, state: &'a TicTacToeState) -> Option<&'a [PlayerId]> {
        state.winners()
    }

    fn current_player<'a>(&self, state: &'a TicTacToeState) -> &'a str {
        &state.current_player_id
    }

    /// First complete line in rows, columns, diagonals order, of either mark.
    fn winning_line(&self, state: &TicTacToeState) -> Option<Vec<usize>> {
        rules::winning_line(&state.board).map(|line| line.map(Position::to_index).to_vec())
    }
}
