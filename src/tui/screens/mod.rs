//! Screen implementations for the game state machine.

mod board;
mod setup;
mod theme_select;

pub use board::{BoardScreen, status_line};
pub use setup::SetupScreen;
pub use theme_select::ThemeScreen;
