use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Renders categories and genres on top, posted comments underneath
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(10)])
        .split(area);

    render_genres(frame, app, chunks[0]);
    render_comments(frame, app, chunks[1]);
}

fn render_genres(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Sidebar;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = app
        .sidebar
        .entries()
        .into_iter()
        .map(|entry| {
            let style = if entry.selection == app.selection {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(entry.label, style)))
        })
        .collect();

    let mut list = List::new(items).block(
        Block::default()
            .title("Genres")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    if focused {
        list = list
            .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::Yellow))
            .highlight_symbol("▶ ");
    }

    let mut state = ListState::default();
    state.select(Some(app.sidebar.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_comments(frame: &mut Frame, app: &App, area: Rect) {
    let board = &app.sidebar.comments;

    let mut lines = Vec::new();
    if board.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet - (c) to write one",
            Style::default().fg(Color::DarkGray),
        )));
    }
    // Newest at the bottom, like a chat log
    for comment in &board.comments {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", comment.nickname),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(comment.body.clone()),
        ]));
        lines.push(Line::from(Span::styled(
            comment.posted_at.format("%-m/%-d/%Y").to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let visible_rows = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible_rows) as u16;

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Comments").borders(Borders::ALL))
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
