//! Router error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A route pattern could not be compiled.
///
/// Only raised while building a [`RouteTable`](crate::RouteTable); runtime
/// navigation never fails.
#[derive(Debug, Clone, Display, Error)]
#[display("Router error: {} at {}:{}", message, file, line)]
pub struct RouterError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RouterError {
    /// Creates a new router error with caller location tracking.
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

impl From<regex::Error> for RouterError {
    #[track_caller]
    fn from(err: regex::Error) -> Self {
        Self::new(format!("Regex error: {}", err))
    }
}
