//! Error types.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::games::tictactoe::Position;

/// Reasons a claim on a cell is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The round already ended; waiting for the board to reset.
    #[display("Game is already over")]
    GameOver,
    /// The cell already holds a symbol.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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

/// Theme selector value that names no theme and is not a usable colour.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown theme or colour: {:?}", value)]
pub struct ThemeError {
    /// The rejected selector value.
    pub value: String,
}

impl ThemeError {
    /// Creates a new theme error for the rejected value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
