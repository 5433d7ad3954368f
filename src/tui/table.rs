//! Everything the screens display: the session, the theme and the banner.

use derive_getters::Getters;

use crate::session::Session;
use crate::setup::Roster;
use crate::theme::Theme;

/// Shared state read by every screen and mutated only by the controller.
#[derive(Debug, Clone, Getters)]
pub struct Table {
    session: Session,
    theme: Theme,
    slogan: String,
}

impl Table {
    /// Creates a table for the roster.
    pub fn new(roster: &Roster, theme: Theme, slogan: impl Into<String>) -> Self {
        Self {
            session: Session::new(roster),
            theme,
            slogan: slogan.into(),
        }
    }

    /// Mutable access to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Replaces the active theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
