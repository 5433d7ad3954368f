//! Setup screen: prompts for player names and symbol, then any fallback notice.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use crate::setup::{self, Notice, Roster};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::table::Table;
use crate::tui::ui;

/// Which prompt is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Name1,
    Name2,
    Symbol,
    Notice(Notice, Roster),
}

/// State for the setup prompts.
#[derive(Debug, Clone)]
pub struct SetupScreen {
    step: Step,
    input: String,
    name1: String,
    name2: String,
}

impl SetupScreen {
    /// Starts at the first name prompt.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SetupScreen");
        Self {
            step: Step::Name1,
            input: String::new(),
            name1: String::new(),
            name2: String::new(),
        }
    }

    /// Shows a notice that must be acknowledged before `roster` takes effect.
    pub fn with_notice(notice: Notice, roster: Roster) -> Self {
        Self {
            step: Step::Notice(notice, roster),
            ..Self::new()
        }
    }

    /// Text of the current prompt.
    pub fn prompt(&self) -> String {
        match &self.step {
            Step::Name1 => "Enter Player 1's name:".to_string(),
            Step::Name2 => "Enter Player 2's name:".to_string(),
            Step::Symbol => format!("{}, choose your symbol (X or O):", self.name1.trim()),
            Step::Notice(notice, _) => notice.to_string(),
        }
    }

    /// Answer typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// True while a notice is waiting for acknowledgement.
    pub fn is_notice(&self) -> bool {
        matches!(self.step, Step::Notice(..))
    }

    /// Submits the current answer and advances.
    #[instrument(skip(self))]
    fn submit(&mut self) -> ScreenTransition {
        let answer = std::mem::take(&mut self.input);
        match std::mem::replace(&mut self.step, Step::Name1) {
            Step::Name1 => {
                self.name1 = answer;
                self.step = Step::Name2;
                ScreenTransition::Stay
            }
            Step::Name2 => {
                self.name2 = answer;
                if setup::names_valid(&self.name1, &self.name2) {
                    self.step = Step::Symbol;
                    ScreenTransition::Stay
                } else {
                    self.finish(None)
                }
            }
            Step::Symbol => self.finish(Some(answer.as_str())),
            Step::Notice(notice, roster) => {
                debug!(%notice, "Notice acknowledged");
                ScreenTransition::StartSession(roster)
            }
        }
    }

    fn finish(&mut self, symbol_choice: Option<&str>) -> ScreenTransition {
        let (roster, notice) = setup::resolve(&self.name1, &self.name2, symbol_choice).into_parts();
        match notice {
            Some(notice) => {
                self.step = Step::Notice(notice, roster);
                ScreenTransition::Stay
            }
            None => {
                info!("Setup complete");
                ScreenTransition::StartSession(roster)
            }
        }
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SetupScreen {
    #[instrument(skip(self, frame, table))]
    fn render(&self, frame: &mut Frame, table: &Table) {
        let palette = table.theme().palette();
        let area = ui::paint_background(frame, &palette);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .split(area);

        frame.render_widget(ui::title(table.slogan().clone(), &palette), chunks[0]);

        let dialog_area = ui::center_rect(chunks[1], 60, 7);
        let (body, help) = if self.is_notice() {
            (self.prompt(), "Enter: OK")
        } else {
            (format!("{}\n\n> {}_", self.prompt(), self.input), "Enter: Submit | Backspace: Delete")
        };
        let title = if self.is_notice() { "Notice" } else { "Players" };
        let dialog = Paragraph::new(body)
            .style(ui::base_style(&palette).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(dialog, dialog_area);

        frame.render_widget(ui::help(help, &palette), chunks[2]);
    }

    #[instrument(skip(self, key, _table))]
    fn handle_key(&mut self, key: KeyEvent, _table: &Table) -> ScreenTransition {
        if self.is_notice() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.submit(),
                _ => ScreenTransition::Stay,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(),
            // A dismissed prompt counts as an empty answer.
            KeyCode::Esc => {
                self.input.clear();
                self.submit()
            }
            _ => ScreenTransition::Stay,
        }
    }
}
