use crate::app::App;
use crate::app::format::{VoteTier, format_date, group_thousands};
use crate::app::listing::SortOrder;
use crate::app::pagination::PageItem;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::loading::render_loading;

/// Renders the sort bar, search box, current page of movies and the page selector
pub fn render_movie_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Sort + search
            Constraint::Min(3),    // Movies
            Constraint::Length(3), // Pagination
        ])
        .split(area);

    render_controls(frame, app, chunks[0]);

    let title = app.sidebar.label_for(app.selection);
    if !app.listing.loaded {
        render_loading(frame, app, chunks[1], &title);
    } else {
        render_movies(frame, app, chunks[1], &title);
    }

    render_pagination(frame, app, chunks[2]);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let mut spans = Vec::new();
    for (idx, order) in SortOrder::ALL.into_iter().enumerate() {
        let style = if order == app.listing.sort_order {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{} {}", idx + 1, order.label()), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().title("Order").borders(Borders::ALL)),
        chunks[0],
    );

    let search_style = if app.listing.searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search_text = if app.listing.search_phrase.is_empty() && !app.listing.searching {
        Span::styled("Search", Style::default().fg(Color::DarkGray))
    } else {
        let cursor = if app.listing.searching { "_" } else { "" };
        Span::raw(format!("{}{}", app.listing.search_phrase, cursor))
    };

    frame.render_widget(
        Paragraph::new(Line::from(search_text)).block(
            Block::default()
                .title("Search (/)")
                .borders(Borders::ALL)
                .border_style(search_style),
        ),
        chunks[1],
    );
}

fn render_movies(frame: &mut Frame, app: &App, area: Rect, title: &str) {
    let visible = app.listing.visible();

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No movies match your search",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|movie| {
            let tier = VoteTier::from_average(movie.vote_average);
            ListItem::new(vec![
                Line::from(Span::styled(
                    movie.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("  {}", format_date(movie.release_date.as_deref())),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("★ {:.1}", movie.vote_average),
                        Style::default().fg(tier.color()),
                    ),
                ]),
            ])
        })
        .collect();

    let heading = format!(
        "{} ({} of {} on this page, {} total)",
        title,
        visible.len(),
        app.listing.movies.len(),
        group_thousands(app.listing.total_results as u64)
    );

    let list = List::new(items)
        .block(Block::default().title(heading).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.listing.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for item in app.listing.pagination() {
        let style = match item {
            PageItem::Page(page) if page == app.listing.current_page => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            PageItem::Page(_) => Style::default().fg(Color::White),
            PageItem::Ellipsis => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {item} "), style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().title("Pages (←→)").borders(Borders::ALL)),
        area,
    );
}
