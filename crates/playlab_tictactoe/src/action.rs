//! Player actions and the reasons an action can be refused.

use crate::position::Position;
use playlab_gamekit::PlayerId;
use serde::{Deserialize, Serialize};

/// A player's intent, serialized as `{"type": "place", "position": p}`.
///
/// The position is unchecked so out-of-range requests are representable
/// and refused by validation rather than by deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TicTacToeAction {
    /// Place the mover's symbol on a square.
    Place {
        /// Row-major square index.
        position: i32,
    },
}

impl TicTacToeAction {
    /// Creates a placement at a raw index.
    pub fn place(position: i32) -> Self {
        TicTacToeAction::Place { position }
    }
}

impl From<Position> for TicTacToeAction {
    fn from(pos: Position) -> Self {
        TicTacToeAction::place(pos.to_index() as i32)
    }
}

impl std::fmt::Display for TicTacToeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicTacToeAction::Place { position } => match Position::from_raw(*position) {
                Some(pos) => write!(f, "place {} ({})", position, pos.label()),
                None => write!(f, "place {}", position),
            },
        }
    }
}

/// Why an action was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(PlayerId),

    /// The acting player has no seat in this game.
    #[display("Player {} is not seated", _0)]
    UnknownPlayer(PlayerId),

    /// The position is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(i32),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The turn counter cannot advance any further.
    #[display("Turn counter is exhausted")]
    TurnLimit,
}
