//! Player identity setup: names and symbol choice with fallbacks.

use derive_getters::Getters;
use derive_more::Display;
use tracing::{info, instrument, warn};

use crate::games::tictactoe::Symbol;

/// Name used for player 1 when the prompts are left empty.
pub const DEFAULT_PLAYER1: &str = "Player 1";
/// Name used for player 2 when the prompts are left empty.
pub const DEFAULT_PLAYER2: &str = "Player 2";

/// Blocking notification raised when a prompt answer was replaced by a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Notice {
    /// One of the name prompts was empty.
    #[display("Player names cannot be empty. Using default names.")]
    EmptyNames,
    /// The symbol answer was neither X nor O.
    #[display("Invalid symbol choice. Defaulting to X for Player 1 and O for Player 2.")]
    InvalidSymbol,
}

/// Names and symbols of both players.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Roster {
    player1: String,
    player1_symbol: Symbol,
    player2: String,
}

impl Roster {
    /// Creates a roster; player 2 always holds the complementary symbol.
    pub fn new(
        player1: impl Into<String>,
        player1_symbol: Symbol,
        player2: impl Into<String>,
    ) -> Self {
        Self {
            player1: player1.into(),
            player1_symbol,
            player2: player2.into(),
        }
    }

    /// Symbol held by player 2.
    pub fn player2_symbol(&self) -> Symbol {
        self.player1_symbol.opponent()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER1, Symbol::X, DEFAULT_PLAYER2)
    }
}

/// Outcome of resolving the prompt answers.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Resolution {
    roster: Roster,
    notice: Option<Notice>,
}

impl Resolution {
    /// Splits the resolution into its roster and optional notice.
    pub fn into_parts(self) -> (Roster, Option<Notice>) {
        (self.roster, self.notice)
    }
}

/// Returns true when both names are usable, meaning the symbol prompt should be shown.
pub fn names_valid(name1: &str, name2: &str) -> bool {
    !name1.trim().is_empty() && !name2.trim().is_empty()
}

/// Resolves the answers to the setup prompts.
///
/// Empty names fall back to the defaults and skip the symbol choice.
/// A symbol answer other than `X` or `O` (case-insensitive) falls back
/// to X for player 1.
#[instrument]
pub fn resolve(name1: &str, name2: &str, symbol_choice: Option<&str>) -> Resolution {
    if !names_valid(name1, name2) {
        warn!("Empty player name, using defaults");
        return Resolution {
            roster: Roster::default(),
            notice: Some(Notice::EmptyNames),
        };
    }

    let (name1, name2) = (name1.trim(), name2.trim());
    let choice = symbol_choice.unwrap_or_default().trim().to_uppercase();
    let (symbol, notice) = match choice.as_str() {
        "X" => (Symbol::X, None),
        "O" => (Symbol::O, None),
        _ => {
            warn!(choice = %choice, "Invalid symbol choice, defaulting to X");
            (Symbol::X, Some(Notice::InvalidSymbol))
        }
    };

    info!(player1 = %name1, player2 = %name2, player1_symbol = %symbol, "Players resolved");
    Resolution {
        roster: Roster::new(name1, symbol, name2),
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_valid_ignores_whitespace_only() {
        assert!(names_valid("Ann", "Bo"));
        assert!(!names_valid("  ", "Bo"));
        assert!(!names_valid("Ann", ""));
    }

    #[test]
    fn test_default_roster_is_x_then_o() {
        let roster = Roster::default();
        assert_eq!(roster.player1(), DEFAULT_PLAYER1);
        assert_eq!(*roster.player1_symbol(), Symbol::X);
        assert_eq!(roster.player2_symbol(), Symbol::O);
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(
            Notice::EmptyNames.to_string(),
            "Player names cannot be empty. Using default names."
        );
    }
}
