use crate::app::App;
use crate::app::comments::CommentField;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::centered_rect;

pub fn render_comment_form(frame: &mut Frame, app: &App, area: Rect) {
    let board = &app.sidebar.comments;
    let popup = centered_rect(60, 16, area);

    let outer = Block::default()
        .title("Write a comment")
        .borders(Borders::ALL);
    let inner = outer.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(outer, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let field_block = |title: &'static str, field: CommentField| {
        let style = if board.focused_field == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(style)
    };

    frame.render_widget(
        Paragraph::new(board.draft_nickname.as_str())
            .block(field_block("Nickname", CommentField::Nickname)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(board.draft_body.as_str())
            .wrap(Wrap { trim: false })
            .block(field_block("Text", CommentField::Body)),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Both fields are required to post",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[2],
    );
}
