use crate::app::App;
use crate::app::detail::ActorDetailState;
use crate::app::format::format_date;
use crate::app::tmdb::Person;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

use super::loading::render_loading;

pub fn render_actor_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.is_loading() {
        render_loading(frame, app, area, "Actor Details");
        return;
    }
    let Some(state) = app.actor_detail.as_mut() else {
        return;
    };
    let Some(name) = state.person.as_ref().map(|person| person.name.clone()) else {
        return;
    };

    let outer_block = Block::default()
        .title(format!("Actor Details - {name}"))
        .borders(Borders::ALL);
    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Min(5)])
        .split(inner_area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(20)])
        .split(rows[0]);

    render_profile_section(frame, top[0], state);
    if let Some(person) = &state.person {
        render_bio_section(frame, top[1], person);
    }
    render_filmography(frame, rows[1], &name, state);
}

/// Profile picture, or the local placeholder when TMDB has none
fn render_profile_section(frame: &mut Frame, area: Rect, state: &mut ActorDetailState) {
    let title = match (state.image_index(), state.images.len()) {
        (Some(idx), total) if total > 1 => format!("Photo {}/{} ([ ])", idx + 1, total),
        _ => "Photo".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if let Some(protocol) = &mut state.profile {
        let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));
        let inner_area = block.inner(area);
        frame.render_widget(block, area);
        frame.render_stateful_widget(image, inner_area, protocol);
        return;
    }

    let placeholder = if state.loading_profile {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "Downloading photo...",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled("   .---.   ", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled("  ( o o )  ", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled("   \\ - /   ", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled("  /|   |\\  ", Style::default().fg(Color::DarkGray))),
            Line::from(""),
            Line::from(Span::styled("No image", Style::default().fg(Color::Gray))),
        ]
    };

    frame.render_widget(
        Paragraph::new(placeholder)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_bio_section(frame: &mut Frame, area: Rect, person: &Person) {
    let field = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{name}: "),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };

    let mut content = vec![
        Line::from(Span::styled(
            person.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Birthday", format_date(person.birthday.as_deref())),
    ];
    if person.deathday.is_some() {
        content.push(field("Death Day", format_date(person.deathday.as_deref())));
    }
    content.push(field(
        "Place of Birth",
        person.place_of_birth.clone().unwrap_or_default(),
    ));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Biography",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for paragraph in person.biography.split("\n\n") {
        content.push(Line::from(paragraph.trim().to_string()));
        content.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), area);
}

fn render_filmography(frame: &mut Frame, area: Rect, name: &str, state: &ActorDetailState) {
    let items: Vec<ListItem> = state
        .credits
        .iter()
        .map(|credit| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    credit.title.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" / "),
                Span::styled(credit.character.clone(), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("  {}", format_date(credit.release_date.as_deref())),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("{name} - Movies ({})", state.credits.len()))
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
    list_state.select(Some(state.selected_credit));
    frame.render_stateful_widget(list, area, &mut list_state);
}
