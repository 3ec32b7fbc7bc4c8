mod app;
use app::App;

mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use ratatui::Terminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::config::{self, Config};
use crate::app::listing::SortOrder;
use crate::app::route::Route;
use crate::app::tmdb::{TmdbApi, TmdbClient};
use crate::app::comments::CommentField;
use crate::app::{CurrentScreen, Focus};

/// The terminal owns stdout/stderr, so the developer log goes to a file.
fn init_tracing(log_path: Option<&Path>) {
    let Some(path) = log_path else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn start_route() -> Route {
    let Some(raw) = std::env::args().nth(1) else {
        return Route::default();
    };
    Route::parse(&raw).unwrap_or_else(|| {
        warn!(path = %raw, "unrecognised start path, opening the movie list");
        Route::default()
    })
}

fn main() -> Result<()> {
    init_tracing(config::default_log_path().as_deref());
    let config = Config::from_env();

    let api: Option<Arc<dyn TmdbApi>> = match TmdbClient::new(&config) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("TMDB client unavailable: {e:#}");
            None
        }
    };

    // Must run before raw mode: it queries the terminal for graphics support
    let picker = Picker::from_query_stdio().unwrap_or_else(|e| {
        warn!("terminal graphics query failed ({e:?}), falling back to half blocks");
        Picker::halfblocks()
    });

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let mut app = App::new(api, Some(picker));
    app.start(start_route());
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stderr>>, app: &mut App) -> Result<()> {
    loop {
        app.drain_messages();
        app.tick();
        terminal.draw(|f| ui::ui(f, app))?;

        // Poll for events with a timeout to allow UI updates
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == event::KeyEventKind::Release {
            // Skip events that are not KeyEventKind::Press
            continue;
        }

        if let CurrentScreen::Exiting = app.current_screen {
            match key.code {
                KeyCode::Char('y') => return Ok(()),
                KeyCode::Char('n') | KeyCode::Esc => app.current_screen = CurrentScreen::Main,
                _ => {}
            }
            continue;
        }

        // Text entry swallows every key until it is closed
        if app.sidebar.comments.form_open {
            handle_comment_form_key(app, key);
            continue;
        }
        if app.listing.searching {
            handle_search_key(app, key);
            continue;
        }

        match key.code {
            KeyCode::Char('q') => {
                app.current_screen = CurrentScreen::Exiting;
                continue;
            }
            KeyCode::Tab => {
                app.toggle_focus();
                continue;
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                app.back();
                continue;
            }
            _ => {}
        }

        match app.focus {
            Focus::Sidebar => handle_sidebar_key(app, key),
            Focus::Content => match app.route {
                Route::Home(_) => handle_list_key(app, key),
                Route::Movie(_) | Route::Actor(_) => handle_detail_key(app, key),
            },
        }
    }
}

fn handle_comment_form_key(app: &mut App, key: KeyEvent) {
    let board = &mut app.sidebar.comments;
    match key.code {
        KeyCode::Esc => board.toggle_form(),
        KeyCode::Tab => board.switch_field(),
        KeyCode::Enter => {
            if board.focused_field == CommentField::Nickname {
                board.switch_field();
            } else if board.post() {
                info!(count = board.comments.len(), "comment posted");
            }
        }
        KeyCode::Backspace => board.pop_char(),
        KeyCode::Char(c) => board.push_char(c),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.listing.push_search_char(c),
        KeyCode::Backspace => app.listing.pop_search_char(),
        KeyCode::Enter => app.listing.searching = false,
        KeyCode::Esc => {
            app.listing.searching = false;
            app.listing.clear_search();
        }
        _ => {}
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.sidebar.move_cursor(true),
        KeyCode::Up | KeyCode::Char('k') => app.sidebar.move_cursor(false),
        KeyCode::Enter => app.choose_sidebar_entry(),
        KeyCode::Char('c') => app.sidebar.comments.toggle_form(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('/') => app.listing.searching = true,
        KeyCode::Char('o') => {
            let next = app.listing.sort_order.cycle();
            app.listing.set_sort_order(next);
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            app.listing.set_sort_order(SortOrder::ALL[idx]);
        }
        KeyCode::Right | KeyCode::Char('l') => app.change_page(app.listing.current_page + 1),
        KeyCode::Left | KeyCode::Char('h') => {
            app.change_page(app.listing.current_page.saturating_sub(1))
        }
        KeyCode::Home => app.change_page(1),
        KeyCode::End => app.change_page(app.listing.last_page()),
        KeyCode::Char('c') => app.sidebar.comments.toggle_form(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char(']') => app.cycle_actor_image(true),
        KeyCode::Char('[') => app.cycle_actor_image(false),
        _ => {}
    }
}
