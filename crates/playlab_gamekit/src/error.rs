//! Error types for engines, the random generator and the registry.
//!
//! Every error records the source location where it was raised so a
//! misbehaving caller can be found from a log line alone.

use derive_more::{Display, Error};
use tracing::instrument;

/// An action was applied that the engine's validity predicate rejects.
///
/// This signals a caller bug: the UI or AI should have checked
/// `is_valid_action` first.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid action by {}: {} at {}:{}", player_id, message, file, line)]
pub struct InvalidActionError {
    /// Why the action was rejected.
    pub message: String,
    /// Player that attempted the action.
    pub player_id: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidActionError {
    /// Creates a new invalid action error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message, player_id))]
    pub fn new(message: impl Into<String>, player_id: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            player_id: player_id.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// `pick` was called on an empty slice.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot pick from empty input at {}:{}", file, line)]
pub struct EmptyInputError {
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EmptyInputError {
    /// Creates a new empty input error.
    #[track_caller]
    pub fn new() -> Self {
        let loc = std::panic::Location::caller();
        Self {
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl Default for EmptyInputError {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

/// The game configuration cannot produce an initial state.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Setup error: {} at {}:{}", message, file, line)]
pub struct SetupError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SetupError {
    /// Creates a new setup error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// No engine is registered under the requested game id.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown game '{}' at {}:{}", game_id, file, line)]
pub struct UnknownGameError {
    /// The id that was looked up.
    pub game_id: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl UnknownGameError {
    /// Creates a new unknown game error.
    #[track_caller]
    pub fn new(game_id: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            game_id: game_id.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Any error raised while driving an engine through the registry.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, derive_more::From)]
pub enum EngineError {
    /// Initial state could not be built.
    #[display("{}", _0)]
    Setup(SetupError),
    /// An action was rejected.
    #[display("{}", _0)]
    InvalidAction(InvalidActionError),
    /// Game id not registered.
    #[display("{}", _0)]
    UnknownGame(UnknownGameError),
    /// A type-erased state could not be decoded.
    #[display("Malformed state: {}", _0)]
    #[from(skip)]
    MalformedState(#[error(not(source))] String),
}
