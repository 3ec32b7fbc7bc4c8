use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title block with the current route, browser-address-bar style
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let title = Line::from(vec![
        Span::styled("Movies", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(app.route.path(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(
            app.sidebar.label_for(app.selection),
            Style::default().fg(Color::Gray),
        ),
    ]);

    frame.render_widget(Paragraph::new(title).block(title_block), area);
}
