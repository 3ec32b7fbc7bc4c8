use crate::app::route::Route;
use crate::app::{App, CurrentScreen, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    if let CurrentScreen::Exiting = app.current_screen {
        return "(y) to confirm, (n) to cancel";
    }
    if app.sidebar.comments.form_open {
        return "(Tab) switch field, (Enter) post, (Esc) close";
    }
    if app.listing.searching {
        return "Type to filter, (Enter) keep filter, (Esc) clear";
    }

    match (app.focus, app.route) {
        (Focus::Sidebar, _) => "(↑↓) move, (Enter) select, (c) comment, (Tab) content, (q) quit",
        (Focus::Content, Route::Home(_)) => {
            "(↑↓) move, (Enter) open, (/) search, (o/1-5) sort, (←→) page, (Tab) sidebar, (q) quit"
        }
        (Focus::Content, Route::Movie(_)) => "(↑↓) cast, (Enter) actor, (Esc/b) back, (q) quit",
        (Focus::Content, Route::Actor(_)) => {
            "(↑↓) movies, (Enter) movie, ([/]) photos, (Esc/b) back, (q) quit"
        }
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let instruction_text = get_instruction_text(app);
    let bottom = Paragraph::new(Text::styled(instruction_text, Style::default()))
        .block(bottom_block);

    frame.render_widget(bottom, area);
}
