//! Core domain types for tic-tac-toe.

use crate::position::Position;
use playlab_gamekit::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mark placed on the board. The first seat plays `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Symbol {
    /// First player's mark.
    X,
    /// Second player's mark.
    O,
}

impl Symbol {
    /// Mark assigned to the seat at `seat` (0 or 1).
    pub fn for_seat(seat: usize) -> Self {
        if seat == 0 { Symbol::X } else { Symbol::O }
    }
}

/// 3x3 tic-tac-toe board, serialized as nine `null | "X" | "O"` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Option<Symbol>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from raw row-major cells.
    pub fn from_cells(cells: [Option<Symbol>; 9]) -> Self {
        Self { cells }
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Option<Symbol> {
        self.cells[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns a copy of this board with `symbol` placed at `pos`.
    pub fn with(&self, pos: Position, symbol: Symbol) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Some(symbol);
        Self { cells }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Option<Symbol>; 9] {
        &self.cells
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    None => (pos + 1).to_string(),
                    Some(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Complete game state.
///
/// Only [`TicTacToeEngine`](crate::TicTacToeEngine) builds states; every
/// transition returns a fresh value and leaves its input untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicTacToeState {
    pub(crate) board: Board,
    pub(crate) current_player_id: PlayerId,
    pub(crate) player_ids: [PlayerId; 2],
    pub(crate) symbols: BTreeMap<PlayerId, Symbol>,
    pub(crate) game_over: bool,
    pub(crate) winners: Option<Vec<PlayerId>>,
    pub(crate) turn: u32,
    pub(crate) rng_state: u32,
}

impl TicTacToeState {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player_id(&self) -> &str {
        &self.current_player_id
    }

    /// Returns both seats in turn order.
    pub fn player_ids(&self) -> &[PlayerId; 2] {
        &self.player_ids
    }

    /// Returns the player-to-symbol assignment.
    pub fn symbols(&self) -> &BTreeMap<PlayerId, Symbol> {
        &self.symbols
    }

    /// Returns the mark of `player_id`, if seated.
    pub fn symbol_of(&self, player_id: &str) -> Option<Symbol> {
        self.symbols.get(player_id).copied()
    }

    /// Whether the game has ended.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Winners, set once when the game ends; `None` for a draw or while running.
    pub fn winners(&self) -> Option<&[PlayerId]> {
        self.winners.as_deref()
    }

    /// 1-based turn number.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Seed recorded at creation.
    pub fn rng_state(&self) -> u32 {
        self.rng_state
    }

    /// The seat that is not `player_id`.
    pub(crate) fn opponent_of(&self, player_id: &str) -> &str {
        if self.player_ids[0] == player_id {
            &self.player_ids[1]
        } else {
            &self.player_ids[0]
        }
    }
}
