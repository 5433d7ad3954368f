//! Duel tic-tac-toe - two players, one terminal.
//!
//! Turn-taking, win/tie detection, running score tallies and colour
//! themes, driven from the keyboard.
//!
//! # Architecture
//!
//! - **Games**: board, positions and the fixed-line win check
//! - **Session**: turn state, game-over flag and score counters
//! - **Setup**: player names and symbol choice with fallbacks
//! - **Theme**: preset and custom colour themes
//! - **TUI**: screens and the controller driving them
//!
//! # Example
//!
//! ```
//! use duel_tictactoe::{Position, Roster, Session, Symbol, Turn};
//!
//! let mut session = Session::new(&Roster::new("Ann", Symbol::X, "Bo"));
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter, Position::BottomRight] {
//!     session.play(pos).unwrap();
//! }
//! let turn = session.play(Position::TopRight).unwrap();
//! assert!(matches!(turn, Turn::Won { symbol: Symbol::X, .. }));
//! assert_eq!(session.message(), "Ann wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;
mod session;
mod setup;
mod slogan;
mod theme;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigOverrides, DEFAULT_RESET_DELAY_MS, DuelConfig};

// Crate-level exports - Errors
pub use error::{ConfigError, MoveError, ThemeError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Outcome, Position, Square, Symbol, check_winner, evaluate, rules, winning_line,
};

// Crate-level exports - Session and setup
pub use session::{Player, Session, Turn};
pub use setup::{DEFAULT_PLAYER1, DEFAULT_PLAYER2, Notice, Resolution, Roster, names_valid, resolve};

// Crate-level exports - Cosmetics
pub use slogan::SLOGANS;
pub use theme::{DARK_TEXT, LIGHT_TEXT, NamedTheme, Palette, Rgb, Theme};

// Crate-level exports - Terminal UI
pub use tui::{
    ActiveScreen, BoardScreen, DuelController, Screen, ScreenTransition, SetupScreen, Table,
    ThemeScreen, move_cursor, run_tui, status_line,
};
