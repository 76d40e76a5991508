//! Tic-tac-toe for playlab.
//!
//! A pure, deterministic engine: [`TicTacToeEngine`] implements
//! [`GameEngine`](playlab_gamekit::GameEngine) over immutable
//! [`TicTacToeState`] values.
//!
//! ```
//! use playlab_gamekit::{GameConfig, GameEngine};
//! use playlab_tictactoe::{TicTacToeAction, TicTacToeEngine};
//!
//! let engine = TicTacToeEngine::new();
//! let state = engine
//!     .init(&GameConfig::new(42, vec!["alice".into(), "bob".into()]))
//!     .unwrap();
//! let next = engine
//!     .apply_action(&state, &TicTacToeAction::place(4), "alice")
//!     .unwrap();
//! assert_eq!(next.current_player_id(), "bob");
//! assert!(state.board().cells().iter().all(Option::is_none));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
pub mod rules;
mod types;

pub use action::{MoveRejection, TicTacToeAction};
pub use engine::TicTacToeEngine;
pub use position::Position;
pub use types::{Board, Symbol, TicTacToeState};
