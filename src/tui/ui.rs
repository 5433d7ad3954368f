//! Stateless rendering helpers shared by the screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{Board, Position, Square, Symbol};
use crate::theme::Palette;

/// Paints the whole frame with the theme background and returns the area.
pub fn paint_background(frame: &mut Frame, palette: &Palette) -> Rect {
    let area = frame.area();
    let background = Block::default().style(base_style(palette));
    frame.render_widget(background, area);
    area
}

/// Regular text style for the palette.
pub fn base_style(palette: &Palette) -> Style {
    Style::default().fg(palette.foreground).bg(palette.background)
}

/// A bordered, centred paragraph in the accent colour.
pub fn title<'a>(text: impl Into<Line<'a>>, palette: &Palette) -> Paragraph<'a> {
    Paragraph::new(text.into())
        .style(base_style(palette).fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Dimmed, centred help line.
pub fn help<'a>(text: &'a str, palette: &Palette) -> Paragraph<'a> {
    Paragraph::new(text)
        .style(base_style(palette).add_modifier(Modifier::DIM))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Renders the board with cursor and winning-line highlight.
pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    winning_line: Option<[Position; 3]>,
    palette: &Palette,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in Position::ALL.chunks(3).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for (i, &pos) in chunk.iter().enumerate() {
            let highlighted = winning_line.is_some_and(|line| line.contains(&pos));
            draw_cell(
                frame,
                cols[i * 2],
                board.get(pos),
                pos,
                cursor == Some(pos),
                highlighted,
                palette,
            );
            if i < 2 {
                let sep = Paragraph::new(vec![Line::from("│"); 3])
                    .style(base_style(palette))
                    .alignment(Alignment::Center);
                frame.render_widget(sep, cols[i * 2 + 1]);
            }
        }

        if row < 2 {
            let sep =
                Paragraph::new("─".repeat(board_area.width as usize)).style(base_style(palette));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    under_cursor: bool,
    highlighted: bool,
    palette: &Palette,
) {
    let (symbol, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            base_style(palette).add_modifier(Modifier::DIM),
        ),
        Square::Occupied(Symbol::X) => (
            "X".to_string(),
            base_style(palette).fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Symbol::O) => (
            "O".to_string(),
            base_style(palette).fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };

    if highlighted {
        style = style.bg(palette.highlight).add_modifier(Modifier::SLOW_BLINK);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{symbol:^width$}", width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// A `width` x `height` rectangle centred in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_is_centred() {
        let rect = center_rect(Rect::new(0, 0, 100, 50), 40, 10);
        assert_eq!(rect, Rect::new(30, 20, 40, 10));
    }

    #[test]
    fn test_center_rect_clamps_to_small_area() {
        let rect = center_rect(Rect::new(0, 0, 20, 5), 40, 10);
        assert!(rect.width <= 20 && rect.height <= 5);
    }
}
