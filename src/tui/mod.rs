//! Terminal UI.

mod controller;
mod input;
mod screen;
mod screens;
mod table;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::DuelConfig;

pub use controller::{ActiveScreen, DuelController};
pub use input::move_cursor;
pub use screen::{Screen, ScreenTransition};
pub use screens::{BoardScreen, SetupScreen, ThemeScreen, status_line};
pub use table::Table;

/// Runs the game in the terminal until the players exit.
#[instrument(skip(config))]
pub async fn run_tui(config: &DuelConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = DuelController::new(config);
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}
