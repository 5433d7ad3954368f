//! Tic-tac-toe board, positions and rules.

mod position;
pub mod rules;
mod types;

pub use position::Position;
pub use rules::{Outcome, check_winner, evaluate, winning_line};
pub use types::{Board, Square, Symbol};
