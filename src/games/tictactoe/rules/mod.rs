//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the
//! session so the win check can be exercised on its own.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A symbol completed a line.
    Win(Symbol),
    /// The board filled up with no line completed.
    Tie,
}

/// Evaluates the board.
///
/// A winning triple takes precedence over a full board. Returns `None`
/// while the round can continue.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(symbol) = check_winner(board) {
        return Some(Outcome::Win(symbol));
    }
    is_full(board).then_some(Outcome::Tie)
}
