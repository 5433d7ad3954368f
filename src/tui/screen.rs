//! Screen trait and transition type for the game state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use super::table::Table;
use crate::games::tictactoe::Position;
use crate::setup::Roster;
use crate::theme::Theme;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`DuelController`](super::DuelController) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen, no state change.
    Stay,
    /// Setup finished; start playing with these identities.
    StartSession(Roster),
    /// Claim a cell for the player to move.
    Claim(Position),
    /// Clear the board for a new round.
    ResetRound,
    /// Clear every score and ask for player identities again.
    QuitSession,
    /// Open the theme selector.
    OpenThemes,
    /// Apply a theme and return to the board.
    ApplyTheme(Theme),
    /// Return to the board unchanged.
    BackToBoard,
    /// Leave the program.
    Exit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, table: &Table);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, table: &Table) -> ScreenTransition;
}
