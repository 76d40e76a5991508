//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the engine
//! so hosts and AIs can evaluate positions without a full state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, has_line, winning_line};
