//! Tests for key routing, the reset deadline and rendering.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use duel_tictactoe::{
    ActiveScreen, DuelConfig, DuelController, NamedTheme, Position, Symbol, Theme,
};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

fn seeded_config() -> DuelConfig {
    DuelConfig::from_toml(
        "player1 = \"Ann\"\nplayer2 = \"Bo\"\nsymbol = \"X\"\nreset_delay_ms = 2000\n",
    )
    .unwrap()
}

fn press(controller: &mut DuelController, code: KeyCode, now: Instant) -> bool {
    controller.handle_key(KeyEvent::from(code), now)
}

fn type_keys(controller: &mut DuelController, keys: &str, now: Instant) {
    for c in keys.chars() {
        assert!(press(controller, KeyCode::Char(c), now));
    }
}

fn render(controller: &DuelController) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| controller.render(f)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(controller: &DuelController) -> String {
    render(controller).content.iter().map(|cell| cell.symbol()).collect()
}

/// Rows and symbols of every cell painted in the highlight colour.
fn highlighted_cells(controller: &DuelController) -> Vec<(u16, String)> {
    let highlight = controller.table().theme().palette().highlight;
    let buffer = render(controller);
    let width = buffer.area.width as usize;
    buffer
        .content
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.bg == highlight)
        .map(|(i, cell)| ((i / width) as u16, cell.symbol().to_string()))
        .collect()
}

#[test]
fn test_seeded_names_skip_prompts() {
    let controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    assert!(matches!(controller.screen(), ActiveScreen::Board(_)));
}

#[test]
fn test_unseeded_starts_with_prompts() {
    let mut controller = DuelController::with_slogan(&DuelConfig::default(), "Test slogan");
    assert!(matches!(controller.screen(), ActiveScreen::Setup(_)));

    let now = Instant::now();
    type_keys(&mut controller, "Ann", now);
    press(&mut controller, KeyCode::Enter, now);
    type_keys(&mut controller, "Bo", now);
    press(&mut controller, KeyCode::Enter, now);
    type_keys(&mut controller, "o", now);
    press(&mut controller, KeyCode::Enter, now);

    assert!(matches!(controller.screen(), ActiveScreen::Board(_)));
    let session = controller.table().session();
    assert_eq!(*session.player1().symbol(), Symbol::O);
    assert_eq!(session.current_player().name(), "Bo");
}

#[test]
fn test_round_resets_after_delay() {
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    let now = Instant::now();
    type_keys(&mut controller, "14253", now);

    assert!(*controller.table().session().game_over());
    assert_eq!(*controller.reset_deadline(), Some(now + Duration::from_millis(2000)));

    controller.tick(now + Duration::from_millis(1999));
    assert!(*controller.table().session().game_over());

    controller.tick(now + Duration::from_millis(2000));
    let session = controller.table().session();
    assert!(!*session.game_over());
    assert!(session.board().is_empty(Position::TopLeft));
    assert_eq!(*session.player1().wins(), 1);
    assert_eq!(*controller.reset_deadline(), None);
}

#[test]
fn test_manual_reset_cancels_pending_deadline() {
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    let now = Instant::now();
    type_keys(&mut controller, "14253", now);
    type_keys(&mut controller, "r", now);
    assert_eq!(*controller.reset_deadline(), None);

    // A claim in the fresh round must survive the old deadline.
    type_keys(&mut controller, "5", now);
    controller.tick(now + Duration::from_secs(5));
    assert!(!controller.table().session().board().is_empty(Position::Center));
}

#[test]
fn test_claims_during_game_over_are_ignored() {
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    let now = Instant::now();
    type_keys(&mut controller, "142539", now);
    assert!(controller.table().session().board().is_empty(Position::BottomRight));
    assert_eq!(*controller.table().session().total_games(), 1);
}

#[test]
fn test_quit_clears_scores_and_prompts_again() {
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    let now = Instant::now();
    type_keys(&mut controller, "14253", now);
    type_keys(&mut controller, "q", now);

    assert!(matches!(controller.screen(), ActiveScreen::Setup(_)));
    assert_eq!(*controller.table().session().total_games(), 0);
    assert_eq!(*controller.reset_deadline(), None);
}

#[test]
fn test_theme_selection_applies_and_returns_to_board() {
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    let now = Instant::now();
    type_keys(&mut controller, "t", now);
    assert!(matches!(controller.screen(), ActiveScreen::Themes(_)));

    press(&mut controller, KeyCode::Down, now);
    press(&mut controller, KeyCode::Down, now);
    press(&mut controller, KeyCode::Enter, now);
    assert!(matches!(controller.screen(), ActiveScreen::Board(_)));
    assert_eq!(*controller.table().theme(), Theme::Named(NamedTheme::Dark));
}

#[test]
fn test_escape_and_ctrl_c_exit() {
    let now = Instant::now();
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    assert!(!press(&mut controller, KeyCode::Esc, now));

    let mut controller = DuelController::with_slogan(&DuelConfig::default(), "Test slogan");
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(!controller.handle_key(ctrl_c, now));
}

#[test]
fn test_board_screen_renders_scores_and_message() {
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    let text = screen_text(&controller);
    assert!(text.contains("Test slogan"));
    assert!(text.contains("Ann (X) : 0"));
    assert!(text.contains("Total Games: 0"));
    assert!(text.contains("Ann's turn (X)"));

    type_keys(&mut controller, "14253", Instant::now());
    let text = screen_text(&controller);
    assert!(text.contains("Ann wins!"));
    assert!(text.contains("Total Games: 1"));
}

#[test]
fn test_setup_screen_renders_prompt() {
    let controller = DuelController::with_slogan(&DuelConfig::default(), "Test slogan");
    assert!(screen_text(&controller).contains("Enter Player 1's name:"));
}

#[test]
fn test_winning_cells_are_highlighted() {
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    assert!(highlighted_cells(&controller).is_empty());

    type_keys(&mut controller, "14253", Instant::now());
    let cells = highlighted_cells(&controller);

    // Three 12x3 cells along the top row of the grid.
    assert_eq!(cells.len(), 3 * 12 * 3);
    let mut rows: Vec<u16> = cells.iter().map(|(row, _)| *row).collect();
    rows.dedup();
    assert_eq!(rows.len(), 3);
    let marks: Vec<&str> = cells
        .iter()
        .map(|(_, symbol)| symbol.as_str())
        .filter(|symbol| symbol.trim() != "")
        .collect();
    assert_eq!(marks, ["X", "X", "X"]);

    // O's cells stay unhighlighted.
    assert!(!cells.iter().any(|(_, symbol)| symbol == "O"));
}

#[test]
fn test_tie_highlights_nothing() {
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    // X O X / X O O / O X X
    type_keys(&mut controller, "123546879", Instant::now());
    assert!(screen_text(&controller).contains("It's a tie!"));
    assert!(highlighted_cells(&controller).is_empty());
}

#[test]
fn test_highlight_clears_after_reset() {
    let mut controller = DuelController::with_slogan(&seeded_config(), "Test slogan");
    let now = Instant::now();
    type_keys(&mut controller, "14253", now);
    controller.tick(now + Duration::from_millis(2000));
    assert!(highlighted_cells(&controller).is_empty());
}
