//! Board screen: the grid, scores, round message and total games.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::games::tictactoe::Position;
use crate::session::{Player, Session};
use crate::tui::input::move_cursor;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::table::Table;
use crate::tui::ui;

/// State for the board screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardScreen {
    cursor: Position,
}

impl BoardScreen {
    /// Creates a board screen with the cursor on the centre cell.
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
        }
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }
}

impl Default for BoardScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn score_line(player: &Player) -> String {
    format!("{} ({}) : {}", player.name(), player.symbol(), player.wins())
}

/// Message shown under the board: the round result, or whose turn it is.
pub fn status_line(session: &Session) -> String {
    if session.message().is_empty() {
        let player = session.current_player();
        format!("{}'s turn ({})", player.name(), player.symbol())
    } else {
        session.message().clone()
    }
}

impl Screen for BoardScreen {
    #[instrument(skip(self, frame, table))]
    fn render(&self, frame: &mut Frame, table: &Table) {
        let session = table.session();
        let palette = table.theme().palette();
        let area = ui::paint_background(frame, &palette);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Slogan
                Constraint::Length(4), // Scores
                Constraint::Min(11),   // Board
                Constraint::Length(3), // Message
                Constraint::Length(3), // Help
            ])
            .split(area);

        frame.render_widget(ui::title(table.slogan().clone(), &palette), chunks[0]);

        let scores = Paragraph::new(vec![
            Line::from(format!(
                "{}    {}",
                score_line(session.player1()),
                score_line(session.player2())
            )),
            Line::from(format!("Total Games: {}", session.total_games())),
        ])
        .style(ui::base_style(&palette))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scores"));
        frame.render_widget(scores, chunks[1]);

        let cursor = (!session.game_over()).then_some(self.cursor);
        ui::draw_board(
            frame,
            chunks[2],
            session.board(),
            cursor,
            *session.winning_line(),
            &palette,
        );

        let message = Paragraph::new(status_line(session))
            .style(ui::base_style(&palette).fg(palette.accent).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(message, chunks[3]);

        frame.render_widget(
            ui::help(
                "←↑↓→ Move | Enter/1-9: Play | r: Reset | q: Quit | t: Theme | Esc: Exit",
                &palette,
            ),
            chunks[4],
        );
    }

    #[instrument(skip(self, key, _table))]
    fn handle_key(&mut self, key: KeyEvent, _table: &Table) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => ScreenTransition::Claim(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => match Position::from_digit(c) {
                Some(pos) => {
                    self.cursor = pos;
                    ScreenTransition::Claim(pos)
                }
                None => ScreenTransition::Stay,
            },
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::ResetRound,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::QuitSession,
            KeyCode::Char('t') | KeyCode::Char('T') => ScreenTransition::OpenThemes,
            KeyCode::Esc => ScreenTransition::Exit,
            other => {
                debug!(key = ?other, "Ignoring key");
                ScreenTransition::Stay
            }
        }
    }
}
