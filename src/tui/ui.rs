//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use crate::config::Palette;
use crate::games::tictactoe::{CellView, Mark, Position, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),               // Title
            Constraint::Min(BOARD_HEIGHT),       // Board
            Constraint::Length(3),               // Status
            Constraint::Length(3),               // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A classic, minimalistic two-player game",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = app.session().status();
    let status_text = Paragraph::new(status.to_string())
        .style(status_style(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new("Arrows + Enter or 1-9: move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn status_style(status: Status) -> Style {
    match status {
        Status::Turn(_) => Style::default().fg(Color::Yellow),
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let cells = app.session().cells();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for row in 0..3 {
        let start = row * 3;
        let row_cells = [cells[start], cells[start + 1], cells[start + 2]];
        draw_row(frame, rows[row * 2], &row_cells, app.cursor(), app.palette());
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    cells: &[CellView; 3],
    cursor: Position,
    palette: &Palette,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[i * 2], cell, cursor, palette);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

/// Style for one cell: mark color, then winning-line and cursor backgrounds.
pub(crate) fn cell_style(cell: &CellView, cursor: Position, palette: &Palette) -> Style {
    let base = match cell.mark() {
        None => Style::default().fg(Color::DarkGray),
        Some(Mark::X) => Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        Some(Mark::O) => Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
    };

    if *cell.is_winning() {
        base.bg(palette.win).fg(Color::Black)
    } else if *cell.position() == cursor {
        base.bg(palette.cursor).fg(Color::Black)
    } else {
        base
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: Position, palette: &Palette) {
    let symbol = match cell.mark() {
        Some(mark) => mark.to_string(),
        None => cell.number().to_string(),
    };
    let style = cell_style(cell, cursor, palette);

    // Middle line of the cell carries the symbol; the padding lines keep the
    // background color across the full cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ])
    .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
