use std::collections::VecDeque;

use crate::config::UiConfig;
use crate::game::{Cell, GameSnapshot, GameStatus, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Everything one frame is drawn from.
pub struct ViewState<'a> {
    pub snapshot: GameSnapshot,
    pub selected_column: usize,
    pub messages: &'a VecDeque<String>,
    pub config: &'a UiConfig,
}

pub fn render(frame: &mut Frame, view: &ViewState<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Menu, board and messages
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(9), Constraint::Min(20)])
        .split(chunks[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(3)])
        .split(body[1]);

    render_header(frame, &view.snapshot, chunks[0]);
    render_menu(frame, view, body[0]);
    render_board(frame, view, right[0]);
    render_messages(frame, view.messages, right[1]);
    render_controls(frame, chunks[2]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Red,
        Player::B => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let (status, color) = match snapshot.status {
        GameStatus::InProgress => (
            format!(
                "Current Player: {}  |  Move {}",
                snapshot.current_player,
                snapshot.moves_played + 1
            ),
            player_color(snapshot.current_player),
        ),
        GameStatus::Won(player) => (format!("Game Over  |  {player} wins"), player_color(player)),
        GameStatus::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_menu(frame: &mut Frame, view: &ViewState<'_>, area: Rect) {
    let items: Vec<ListItem> = (0..COLS)
        .map(|column| {
            let style = if column == view.selected_column {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if view.snapshot.is_column_full(column) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow)
            };
            let marker = if column == view.selected_column { ">" } else { " " };
            ListItem::new(format!("{marker} {column}")).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default().borders(Borders::ALL).title("Col"));
    frame.render_widget(menu, area);
}

fn render_board(frame: &mut Frame, view: &ViewState<'_>, area: Rect) {
    let snapshot = &view.snapshot;
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw(" ")];
    for column in 0..COLS {
        if column == view.selected_column {
            col_line.push(Span::styled(
                format!(" {column}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {column}")));
        }
    }
    lines.push(Line::from(col_line));

    // Board rows, top first
    for (offset, cells) in snapshot.rows_top_down().enumerate() {
        let row = ROWS - 1 - offset;
        let mut row_spans = vec![Span::raw("|")];

        for (column, cell) in cells.into_iter().enumerate() {
            let (symbol, color) = match cell.owner() {
                None => ('.', Color::DarkGray),
                Some(Player::A) => (view.config.player_a_symbol, player_color(Player::A)),
                Some(Player::B) => (view.config.player_b_symbol, player_color(Player::B)),
            };
            let mut style = Style::default().fg(color);
            if cell != Cell::Empty && snapshot.is_winning_cell(column, row) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::raw(" "));
            row_spans.push(Span::styled(symbol.to_string(), style));
        }

        row_spans.push(Span::raw(" |"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("+{}+", "-".repeat(COLS * 2 + 1))));

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(board_widget, area);
}

fn render_messages(frame: &mut Frame, messages: &VecDeque<String>, area: Rect) {
    // Keep the newest lines visible
    let visible = area.height.saturating_sub(2) as usize;
    let skip = messages.len().saturating_sub(visible);
    let lines: Vec<Line> = messages
        .iter()
        .skip(skip)
        .map(|msg| Line::from(msg.as_str()))
        .collect();

    let msg_widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→ ↑/↓ 0-6: Select  |  Enter: Drop  |  R: New game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
