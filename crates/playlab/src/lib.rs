//! Playlab - local play, replay and routing tools for the game portal.
//!
//! # Architecture
//!
//! - **Config**: [`PlaylabConfig`], TOML with environment overrides
//! - **Sessions**: [`GameSession`] drives any registered engine over JSON
//! - **Replay**: [`ReplayLog`] records a game and rebuilds it from its seed
//! - **Opponents**: [`RandomPlayer`] plays random legal moves
//! - **Commands**: the logic behind the `playlab` binary

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod commands;
mod config;
mod games;
mod logging;
mod player;
mod replay;
mod session;

pub use config::{ConfigError, PlaylabConfig, SEED_ENV_VAR};
pub use games::{builtin_registry, parse_move, render_state};
pub use logging::init_tracing;
pub use player::RandomPlayer;
pub use replay::{ReplayEntry, ReplayError, ReplayLog};
pub use session::GameSession;
