//! Win detection logic for tic-tac-toe.

use crate::{Board, Position, Symbol};
use tracing::instrument;

/// The eight lines, enumerated rows first, then columns, then diagonals.
///
/// The order is load-bearing: [`winning_line`] reports the first complete
/// line in this order.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Symbol> {
    let mark = board.get(a)?;
    (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(mark)
}

/// Returns the first complete line of any symbol, or `None`.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    WINNING_LINES
        .into_iter()
        .find(|line| line_owner(board, *line).is_some())
}

/// Whether `symbol` owns at least one complete line.
#[instrument]
pub fn has_line(board: &Board, symbol: Symbol) -> bool {
    WINNING_LINES
        .into_iter()
        .any(|line| line_owner(board, line) == Some(symbol))
}
