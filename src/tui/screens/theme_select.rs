//! Theme selector: preset list plus a custom colour entry.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{info, instrument, warn};

use crate::theme::Theme;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::table::Table;
use crate::tui::ui;

/// State for the theme selector.
#[derive(Debug, Clone)]
pub struct ThemeScreen {
    presets: Vec<Theme>,
    list_state: ListState,
    custom_input: String,
    editing: bool,
    error_message: Option<String>,
}

impl ThemeScreen {
    /// Creates the selector with the active theme pre-selected.
    #[instrument]
    pub fn new(active: Theme) -> Self {
        let presets = Theme::presets();
        let mut list_state = ListState::default();
        let selected = match active {
            Theme::Named(_) => presets.iter().position(|t| *t == active).unwrap_or(0),
            Theme::Custom(_) => presets.len(),
        };
        list_state.select(Some(selected));
        let custom_input = match active {
            Theme::Custom(rgb) => rgb.to_string(),
            Theme::Named(_) => String::new(),
        };
        Self {
            presets,
            list_state,
            custom_input,
            editing: false,
            error_message: None,
        }
    }

    /// The error shown after a rejected custom colour.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    fn option_count(&self) -> usize {
        self.presets.len() + 1
    }

    fn select_previous(&mut self) {
        let count = self.option_count();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.option_count(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    #[instrument(skip(self))]
    fn confirm(&mut self) -> ScreenTransition {
        let idx = self.list_state.selected().unwrap_or(0);
        match self.presets.get(idx) {
            Some(theme) => {
                info!(%theme, "Preset theme chosen");
                ScreenTransition::ApplyTheme(*theme)
            }
            None => {
                self.editing = true;
                ScreenTransition::Stay
            }
        }
    }

    #[instrument(skip(self))]
    fn submit_custom(&mut self) -> ScreenTransition {
        match self.custom_input.parse::<Theme>() {
            Ok(theme) => {
                info!(%theme, "Custom theme chosen");
                ScreenTransition::ApplyTheme(theme)
            }
            Err(e) => {
                warn!(error = %e, "Rejected custom colour");
                self.error_message = Some(e.to_string());
                ScreenTransition::Stay
            }
        }
    }
}

impl Screen for ThemeScreen {
    #[instrument(skip(self, frame, table))]
    fn render(&self, frame: &mut Frame, table: &Table) {
        let palette = table.theme().palette();
        let area = ui::paint_background(frame, &palette);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        frame.render_widget(ui::title("Theme", &palette), chunks[0]);

        let mut items: Vec<ListItem> = self
            .presets
            .iter()
            .map(|theme| {
                let marker = if theme == table.theme() { " (active)" } else { "" };
                ListItem::new(format!("{theme}{marker}"))
            })
            .collect();
        items.push(ListItem::new("custom colour (#rrggbb)"));

        let list = List::new(items)
            .style(ui::base_style(&palette))
            .block(Block::default().borders(Borders::ALL).title("Themes"))
            .highlight_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let entry = match &self.error_message {
            Some(error) => format!("{}  ({error})", self.custom_input),
            None if self.editing => format!("{}_", self.custom_input),
            None => self.custom_input.clone(),
        };
        let entry = Paragraph::new(entry)
            .style(ui::base_style(&palette))
            .block(Block::default().borders(Borders::ALL).title("Custom colour"));
        frame.render_widget(entry, chunks[2]);

        let help = if self.editing {
            "Type #rrggbb | Enter: Apply | Esc: Cancel"
        } else {
            "↑↓: Navigate | Enter: Select | Esc: Back"
        };
        frame.render_widget(ui::help(help, &palette), chunks[3]);
    }

    #[instrument(skip(self, key, _table))]
    fn handle_key(&mut self, key: KeyEvent, _table: &Table) -> ScreenTransition {
        if self.editing {
            return match key.code {
                KeyCode::Char(c) => {
                    self.custom_input.push(c);
                    self.error_message = None;
                    ScreenTransition::Stay
                }
                KeyCode::Backspace => {
                    self.custom_input.pop();
                    self.error_message = None;
                    ScreenTransition::Stay
                }
                KeyCode::Enter => self.submit_custom(),
                KeyCode::Esc => {
                    self.editing = false;
                    self.error_message = None;
                    ScreenTransition::Stay
                }
                _ => ScreenTransition::Stay,
            };
        }

        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.confirm(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('t') => ScreenTransition::BackToBoard,
            _ => ScreenTransition::Stay,
        }
    }
}
