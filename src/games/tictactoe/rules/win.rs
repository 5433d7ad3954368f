//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Symbol};
use tracing::instrument;

/// The eight winning triples: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
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

/// Returns the first triple holding three equal non-empty squares, with its symbol.
#[instrument(skip(board))]
pub fn winning_triple(board: &Board) -> Option<(Symbol, [Position; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let symbol = board.get(a).symbol()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a))
            .then_some((symbol, [a, b, c]))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(symbol)` if a symbol has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    winning_triple(board).map(|(symbol, _)| symbol)
}

/// Returns the positions of the winning triple, for highlighting.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    winning_triple(board).map(|(_, line)| line)
}
