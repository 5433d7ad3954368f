//! Game controller: the state machine driving the screens.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend};
use tokio::time::sleep;
use tracing::{debug, info, instrument};

use crate::config::DuelConfig;
use crate::setup::Roster;
use crate::slogan;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{BoardScreen, SetupScreen, ThemeScreen};
use crate::tui::table::Table;

/// Active screen in the state machine.
#[derive(Debug, Clone)]
pub enum ActiveScreen {
    /// Player identity prompts.
    Setup(SetupScreen),
    /// The grid.
    Board(BoardScreen),
    /// Theme selector.
    Themes(ThemeScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Setup(s) => s,
            ActiveScreen::Board(s) => s,
            ActiveScreen::Themes(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Setup(s) => s,
            ActiveScreen::Board(s) => s,
            ActiveScreen::Themes(s) => s,
        }
    }
}

/// Controller that owns the table and applies screen transitions.
///
/// Call [`DuelController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct DuelController {
    table: Table,
    screen: ActiveScreen,
    reset_delay: Duration,
    reset_deadline: Option<Instant>,
}

impl DuelController {
    /// Creates a controller from the configuration.
    ///
    /// When both names are configured the prompts are skipped, though a
    /// fallback notice is still shown.
    #[instrument(skip(config))]
    pub fn new(config: &DuelConfig) -> Self {
        Self::with_slogan(config, slogan::random())
    }

    /// Creates a controller with a fixed banner slogan.
    #[instrument(skip(config))]
    pub fn with_slogan(config: &DuelConfig, slogan: &str) -> Self {
        let (table, screen) = match config.seeded_roster() {
            Some(resolution) => {
                let (roster, notice) = resolution.into_parts();
                let table = Table::new(&roster, *config.theme(), slogan);
                let screen = match notice {
                    Some(notice) => ActiveScreen::Setup(SetupScreen::with_notice(notice, roster)),
                    None => ActiveScreen::Board(BoardScreen::new()),
                };
                (table, screen)
            }
            None => (
                Table::new(&Roster::default(), *config.theme(), slogan),
                ActiveScreen::Setup(SetupScreen::new()),
            ),
        };
        info!(slogan, "Controller ready");
        Self {
            table,
            screen,
            reset_delay: config.reset_delay(),
            reset_deadline: None,
        }
    }

    /// Runs the event loop until the players exit.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game event loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            // Short poll keeps the reset deadline responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key, Instant::now()) {
                    info!("Exiting");
                    return Ok(());
                }
            }

            self.tick(Instant::now());
            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame, &self.table);
    }

    /// Routes a key to the active screen and applies the transition.
    ///
    /// Returns `false` when the program should exit.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        let transition = self.screen.as_screen_mut().handle_key(key, &self.table);
        self.apply_transition(transition, now)
    }

    /// Clears the board once the reset deadline has passed.
    #[instrument(skip(self))]
    pub fn tick(&mut self, now: Instant) {
        if self.reset_deadline.is_some_and(|deadline| now >= deadline) {
            debug!("Reset deadline reached");
            self.reset_deadline = None;
            self.table.session_mut().reset_round();
        }
    }

    /// Applies a screen transition. Returns `false` on exit.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition, now: Instant) -> bool {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::StartSession(roster) => {
                info!(player1 = %roster.player1(), player2 = %roster.player2(), "Starting session");
                self.table.session_mut().replace_roster(&roster);
                self.screen = ActiveScreen::Board(BoardScreen::new());
            }
            ScreenTransition::Claim(pos) => match self.table.session_mut().play(pos) {
                Ok(turn) if turn.is_terminal() => {
                    debug!(
                        ?turn,
                        delay_ms = self.reset_delay.as_millis() as u64,
                        "Round over, reset armed"
                    );
                    self.reset_deadline = Some(now + self.reset_delay);
                }
                Ok(_) => {}
                Err(e) => debug!(error = %e, "Claim ignored"),
            },
            ScreenTransition::ResetRound => {
                self.reset_deadline = None;
                self.table.session_mut().reset_round();
            }
            ScreenTransition::QuitSession => {
                self.reset_deadline = None;
                self.table.session_mut().quit();
                self.screen = ActiveScreen::Setup(SetupScreen::new());
            }
            ScreenTransition::OpenThemes => {
                self.screen = ActiveScreen::Themes(ThemeScreen::new(*self.table.theme()));
            }
            ScreenTransition::ApplyTheme(theme) => {
                info!(%theme, "Applying theme");
                self.table.set_theme(theme);
                self.screen = ActiveScreen::Board(BoardScreen::new());
            }
            ScreenTransition::BackToBoard => {
                self.screen = ActiveScreen::Board(BoardScreen::new());
            }
            ScreenTransition::Exit => return false,
        }
        true
    }
}
