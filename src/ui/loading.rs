use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, WhichUse};

/// Renders a bordered "Loading…" panel with a spinner on its first line
pub fn render_loading(frame: &mut Frame, app: &mut App, area: Rect, title: &str) {
    let loading_block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(Style::default());

    let inner = loading_block.inner(area);
    frame.render_widget(loading_block, area);

    let throbber = Throbber::default()
        .label("Loading…")
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    let line = Rect { height: inner.height.min(1), ..inner };
    frame.render_stateful_widget(throbber, line, &mut app.throbber_state);
}
