use crate::app::App;
use crate::app::detail::MovieDetailState;
use crate::app::format::{VoteTier, format_currency, format_date, group_thousands, trailer_url};
use crate::app::tmdb::Movie;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

use super::loading::render_loading;

/// Renders the movie detail screen
pub fn render_movie_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.is_loading() {
        render_loading(frame, app, area, "Movie Details");
        return;
    }
    let Some(state) = app.movie_detail.as_mut() else {
        return;
    };
    let Some(title) = state.movie.as_ref().map(|movie| movie.title.clone()) else {
        return;
    };

    let outer_block = Block::default()
        .title(format!("Movie Details - {title}"))
        .borders(Borders::ALL)
        .style(Style::default());
    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Poster + info
            Constraint::Min(5),         // Cast
        ])
        .split(inner_area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(20)])
        .split(rows[0]);

    render_poster_section(frame, top[0], state);
    if let Some(movie) = &state.movie {
        render_info_section(frame, top[1], movie, state.trailer_key.as_deref());
    }
    render_cast_section(frame, rows[1], state);
}

/// Renders the poster section
fn render_poster_section(frame: &mut Frame, area: Rect, state: &mut MovieDetailState) {
    let poster_block = Block::default().borders(Borders::ALL).title("Poster");

    if let Some(protocol) = &mut state.poster {
        let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));
        let inner_area = poster_block.inner(area);
        frame.render_widget(poster_block, area);
        frame.render_stateful_widget(image, inner_area, protocol);
        return;
    }

    let message = if state.loading_poster {
        Span::styled(
            "Downloading poster...",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("No poster available", Style::default().fg(Color::Gray))
    };

    let placeholder = Paragraph::new(vec![Line::from(""), Line::from(""), Line::from(message)])
        .alignment(Alignment::Center)
        .block(poster_block);
    frame.render_widget(placeholder, area);
}

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!("{text}: "),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

/// Renders title, figures, vote badge, overview and trailer link
fn render_info_section(frame: &mut Frame, area: Rect, movie: &Movie, trailer_key: Option<&str>) {
    let tier = VoteTier::from_average(movie.vote_average);
    let runtime = movie
        .runtime
        .map(|minutes| format!("{minutes} min"))
        .unwrap_or_else(|| "Unknown".to_string());

    let mut content = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label("Release date"),
            Span::raw(format_date(movie.release_date.as_deref())),
        ]),
        Line::from(vec![label("Duration"), Span::raw(runtime)]),
        Line::from(vec![
            label("Popularity"),
            Span::raw(format!("{}", movie.popularity)),
        ]),
        Line::from(vec![label("Budget"), Span::raw(format_currency(movie.budget))]),
        Line::from(vec![label("Revenue"), Span::raw(format_currency(movie.revenue))]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("( {:.1} )", movie.vote_average),
                Style::default().fg(tier.color()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({} votes)", group_thousands(movie.vote_count)),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            movie.overview.clone(),
            Style::default().fg(Color::White),
        )),
    ];

    if let Some(key) = trailer_key.filter(|key| !key.is_empty()) {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            label("Trailer"),
            Span::styled(
                trailer_url(key),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_cast_section(frame: &mut Frame, area: Rect, state: &MovieDetailState) {
    if state.cast.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No cast information",
            Style::default().fg(Color::Gray),
        ))
        .block(Block::default().title("Cast").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .cast
        .iter()
        .map(|member| {
            let mut spans = vec![
                Span::styled(
                    member.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" / "),
                Span::styled(member.character.clone(), Style::default().fg(Color::Gray)),
            ];
            if member.profile_path.is_none() {
                spans.push(Span::styled(" (no photo)", Style::default().fg(Color::DarkGray)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Cast ({})", state.cast.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_cast));
    frame.render_stateful_widget(list, area, &mut list_state);
}
