mod actor_detail;
mod api_key;
mod comment_form;
mod footer;
mod header;
mod loading;
mod movie_detail;
mod movie_list;
mod sidebar;

use crate::app::route::Route;
use crate::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use actor_detail::render_actor_detail;
use api_key::render_missing_api_key;
use comment_form::render_comment_form;
use footer::render_footer;
use header::render_header;
use movie_detail::render_movie_detail;
use movie_list::render_movie_list;
use sidebar::render_sidebar;

const SIDEBAR_WIDTH: u16 = 28;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    render_sidebar(frame, app, body[0]);

    if !app.has_api() {
        render_missing_api_key(frame, body[1]);
    } else {
        match app.route {
            Route::Home(_) => render_movie_list(frame, app, body[1]),
            Route::Movie(_) => render_movie_detail(frame, app, body[1]),
            Route::Actor(_) => render_actor_detail(frame, app, body[1]),
        }
    }

    render_footer(frame, app, chunks[2]);

    let full = frame.area();
    if app.sidebar.comments.form_open {
        render_comment_form(frame, app, full);
    }

    if let CurrentScreen::Exiting = app.current_screen {
        render_exit_prompt(frame, full);
    }
}

/// Centered rectangle of fixed size, clipped to `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

fn render_exit_prompt(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 5, area);
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Quit? ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("(y) yes  (n) no", Style::default().fg(Color::Gray)),
        ]),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Exit")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Yellow)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
