pub mod comments;
pub mod config;
pub mod detail;
pub mod fetch;
pub mod format;
pub mod listing;
pub mod pagination;
pub mod route;
pub mod selection;
pub mod sidebar;
pub mod tmdb;

use std::sync::Arc;
use std::sync::mpsc;

use ratatui_image::picker::Picker;
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, error, info};

use crate::app::detail::{ActorDetailState, MovieDetailState};
use crate::app::fetch::{FetchMessage, Fetcher, ImageSlot};
use crate::app::listing::ListingState;
use crate::app::route::Route;
use crate::app::selection::Selection;
use crate::app::sidebar::SidebarState;
use crate::app::tmdb::TmdbApi;

/// Identifies one load of a view. Results tagged with an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticket(pub u64);

pub enum CurrentScreen {
    Main,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

pub struct App {
    pub current_screen: CurrentScreen,
    pub focus: Focus,
    pub route: Route,
    pub history: Vec<Route>,
    pub selection: Selection,
    pub sidebar: SidebarState,
    pub listing: ListingState,
    pub movie_detail: Option<MovieDetailState>,
    pub actor_detail: Option<ActorDetailState>,
    pub throbber_state: ThrobberState,
    fetcher: Option<Fetcher>,
    receiver: mpsc::Receiver<FetchMessage>,
    picker: Option<Picker>,
    last_ticket: u64,
}

impl App {
    /// `api` is `None` when no API key is configured; the app then renders the setup
    /// banner and never touches the network.
    pub fn new(api: Option<Arc<dyn TmdbApi>>, picker: Option<Picker>) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            current_screen: CurrentScreen::Main,
            focus: Focus::Content,
            route: Route::default(),
            history: Vec::new(),
            selection: Selection::default(),
            sidebar: SidebarState::default(),
            listing: ListingState::default(),
            movie_detail: None,
            actor_detail: None,
            throbber_state: ThrobberState::default(),
            fetcher: api.map(|api| Fetcher::new(api, sender)),
            receiver,
            picker,
            last_ticket: 0,
        }
    }

    pub fn has_api(&self) -> bool {
        self.fetcher.is_some()
    }

    /// Loads the sidebar genres once and enters the first route.
    pub fn start(&mut self, route: Route) {
        if let Some(fetcher) = &self.fetcher {
            fetcher.genres();
        }
        self.enter(route);
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.history.push(self.route);
        self.enter(route);
    }

    /// Returns to the previous route. `false` when there is nowhere to go back to.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.enter(route);
                true
            }
            None => false,
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.last_ticket += 1;
        Ticket(self.last_ticket)
    }

    fn enter(&mut self, route: Route) {
        info!(path = %route, "navigate");
        self.route = route;
        let ticket = self.issue_ticket();

        match route {
            Route::Home(selection) => {
                self.movie_detail = None;
                self.actor_detail = None;
                if let Some(selection) = selection {
                    self.apply_selection(selection);
                }
                self.listing.ticket = ticket;
                self.listing.loaded = false;
                self.sidebar.focus_selection(self.selection);
                if let Some(fetcher) = &self.fetcher {
                    fetcher.movie_page(ticket, self.selection, self.listing.current_page);
                }
            }
            Route::Movie(id) => {
                self.actor_detail = None;
                self.movie_detail = Some(MovieDetailState::new(ticket));
                if let Some(fetcher) = &self.fetcher {
                    fetcher.movie_detail(ticket, id);
                }
            }
            Route::Actor(id) => {
                self.movie_detail = None;
                self.actor_detail = Some(ActorDetailState::new(ticket));
                if let Some(fetcher) = &self.fetcher {
                    fetcher.actor_detail(ticket, id);
                }
            }
        }
    }

    fn apply_selection(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.listing.current_page = 1;
            self.listing.selected = 0;
            self.listing.movies.clear();
            self.listing.total_pages = 0;
            self.listing.total_results = 0;
        }
    }

    /// Sidebar pick: updates the shared selection and shows the list for it.
    pub fn choose_sidebar_entry(&mut self) {
        let Some(entry) = self.sidebar.entry_under_cursor() else {
            return;
        };
        let route = Route::Home(Some(entry.selection));
        if route == self.route {
            return;
        }
        self.navigate(route);
        self.focus = Focus::Content;
    }

    pub fn change_page(&mut self, page: u32) {
        if !matches!(self.route, Route::Home(_)) || !self.listing.go_to_page(page) {
            return;
        }
        let ticket = self.issue_ticket();
        self.listing.ticket = ticket;
        self.listing.loaded = false;
        if let Some(fetcher) = &self.fetcher {
            fetcher.movie_page(ticket, self.selection, page);
        }
    }

    /// Follows the highlighted row of the current view to its detail route.
    pub fn open_selected(&mut self) {
        let target = match self.route {
            Route::Home(_) => self
                .listing
                .selected_movie()
                .map(|movie| Route::Movie(movie.id)),
            Route::Movie(_) => self
                .movie_detail
                .as_ref()
                .and_then(|state| state.selected_cast_member())
                .map(|member| Route::Actor(member.id)),
            Route::Actor(_) => self
                .actor_detail
                .as_ref()
                .and_then(|state| state.selected_credit())
                .map(|credit| Route::Movie(credit.id)),
        };
        if let Some(route) = target {
            self.navigate(route);
        }
    }

    pub fn select_next(&mut self) {
        match self.route {
            Route::Home(_) => self.listing.select_next(),
            Route::Movie(_) => {
                if let Some(state) = self.movie_detail.as_mut() {
                    state.select_next();
                }
            }
            Route::Actor(_) => {
                if let Some(state) = self.actor_detail.as_mut() {
                    state.select_next();
                }
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.route {
            Route::Home(_) => self.listing.select_previous(),
            Route::Movie(_) => {
                if let Some(state) = self.movie_detail.as_mut() {
                    state.select_previous();
                }
            }
            Route::Actor(_) => {
                if let Some(state) = self.actor_detail.as_mut() {
                    state.select_previous();
                }
            }
        }
    }

    pub fn cycle_actor_image(&mut self, forward: bool) {
        let Some(state) = self.actor_detail.as_mut() else {
            return;
        };
        if let Some(path) = state.cycle_image(forward) {
            if let Some(fetcher) = &self.fetcher {
                fetcher.image(state.ticket, ImageSlot::ActorProfile, path);
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        };
    }

    /// True while the current view is still waiting for its primary object.
    pub fn is_loading(&self) -> bool {
        match self.route {
            Route::Home(_) => !self.listing.loaded,
            Route::Movie(_) => self
                .movie_detail
                .as_ref()
                .is_none_or(|state| state.movie.is_none()),
            Route::Actor(_) => self
                .actor_detail
                .as_ref()
                .is_none_or(|state| state.person.is_none()),
        }
    }

    pub fn tick(&mut self) {
        self.throbber_state.calc_next();
    }

    /// Applies every result that has arrived since the last call, without blocking.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.handle_message(message);
        }
    }

    pub fn handle_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Genres(result) => match result {
                Ok(genres) => {
                    debug!(count = genres.len(), "genres loaded");
                    self.sidebar.genres = genres;
                    self.sidebar.focus_selection(self.selection);
                }
                Err(e) => error!("Error fetching genres: {e:#}"),
            },
            FetchMessage::MoviePage { ticket, result } => {
                if ticket != self.listing.ticket {
                    return stale("movie page", ticket);
                }
                match result {
                    Ok(page) => self.listing.apply_page(page),
                    Err(e) => error!("Error fetching movies: {e:#}"),
                }
            }
            FetchMessage::Movie { ticket, result } => {
                let Some(state) = self.movie_detail.as_mut().filter(|s| s.ticket == ticket)
                else {
                    return stale("movie", ticket);
                };
                match result {
                    Ok(movie) => {
                        if let (Some(path), Some(fetcher)) = (&movie.poster_path, &self.fetcher) {
                            state.loading_poster = true;
                            fetcher.image(ticket, ImageSlot::MoviePoster, path.clone());
                        }
                        state.movie = Some(movie);
                    }
                    Err(e) => error!("Error fetching movie details: {e:#}"),
                }
            }
            FetchMessage::Trailer { ticket, result } => {
                let Some(state) = self.movie_detail.as_mut().filter(|s| s.ticket == ticket)
                else {
                    return stale("trailer", ticket);
                };
                match result {
                    Ok(key) => state.trailer_key = key,
                    Err(e) => error!("Error fetching movie videos: {e:#}"),
                }
            }
            FetchMessage::Cast { ticket, result } => {
                let Some(state) = self.movie_detail.as_mut().filter(|s| s.ticket == ticket)
                else {
                    return stale("cast", ticket);
                };
                match result {
                    Ok(cast) => {
                        state.cast = cast;
                        state.selected_cast = 0;
                    }
                    Err(e) => error!("Error fetching movie credits: {e:#}"),
                }
            }
            FetchMessage::Person { ticket, result } => {
                let Some(state) = self.actor_detail.as_mut().filter(|s| s.ticket == ticket)
                else {
                    return stale("person", ticket);
                };
                match result {
                    Ok(person) => {
                        if let (Some(path), Some(fetcher)) = (&person.profile_path, &self.fetcher) {
                            state.image_path = Some(path.clone());
                            state.loading_profile = true;
                            fetcher.image(ticket, ImageSlot::ActorProfile, path.clone());
                        }
                        state.person = Some(person);
                    }
                    Err(e) => error!("Error fetching actor details: {e:#}"),
                }
            }
            FetchMessage::PersonImages { ticket, result } => {
                let Some(state) = self.actor_detail.as_mut().filter(|s| s.ticket == ticket)
                else {
                    return stale("person images", ticket);
                };
                match result {
                    Ok(images) => state.images = images,
                    Err(e) => error!("Error fetching actor images: {e:#}"),
                }
            }
            FetchMessage::PersonCredits { ticket, result } => {
                let Some(state) = self.actor_detail.as_mut().filter(|s| s.ticket == ticket)
                else {
                    return stale("person credits", ticket);
                };
                match result {
                    Ok(credits) => {
                        state.credits = credits;
                        state.selected_credit = 0;
                    }
                    Err(e) => error!("Error fetching actor movie credits: {e:#}"),
                }
            }
            FetchMessage::Image {
                ticket,
                slot,
                path,
                result,
            } => self.apply_image(ticket, slot, &path, result),
        }
    }

    fn apply_image(
        &mut self,
        ticket: Ticket,
        slot: ImageSlot,
        path: &str,
        result: anyhow::Result<image::DynamicImage>,
    ) {
        let picker = self.picker.as_ref();
        let (loading, protocol) = match slot {
            ImageSlot::MoviePoster => match self.movie_detail.as_mut().filter(|s| s.ticket == ticket) {
                Some(state) => (&mut state.loading_poster, &mut state.poster),
                None => return stale("poster", ticket),
            },
            ImageSlot::ActorProfile => match self
                .actor_detail
                .as_mut()
                .filter(|s| s.ticket == ticket && s.image_path.as_deref() == Some(path))
            {
                Some(state) => (&mut state.loading_profile, &mut state.profile),
                None => return stale("profile image", ticket),
            },
        };

        *loading = false;
        match result {
            Ok(img) => *protocol = picker.map(|picker| picker.new_resize_protocol(img)),
            Err(e) => error!("Error downloading image {path}: {e:#}"),
        }
    }
}

fn stale(kind: &str, ticket: Ticket) {
    debug!(kind, ticket = ticket.0, "dropping result for a view that is gone");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fetch::fake::{FakeTmdb, summary};
    use crate::app::selection::Category;
    use crate::app::tmdb::{GenreId, MovieId, MoviePage, PersonId};
    use std::time::Duration;

    fn app() -> App {
        App::new(Some(Arc::new(FakeTmdb)), None)
    }

    /// Applies exactly `count` results, waiting for each.
    fn pump(app: &mut App, count: usize) {
        for _ in 0..count {
            let message = app
                .receiver
                .recv_timeout(Duration::from_secs(5))
                .expect("fetch result arrives");
            app.handle_message(message);
        }
    }

    #[test]
    fn start_loads_genres_and_first_page() {
        let mut app = app();
        app.start(Route::default());
        assert!(app.is_loading());
        pump(&mut app, 2);

        assert_eq!(app.sidebar.genres.len(), 2);
        assert!(!app.is_loading());
        assert_eq!(app.listing.total_pages, 20);
        assert_eq!(app.listing.movies[0].title, "popular one");
    }

    #[test]
    fn choosing_a_genre_resets_to_first_page() {
        let mut app = app();
        app.start(Route::default());
        pump(&mut app, 2);
        app.change_page(3);
        pump(&mut app, 1);
        assert_eq!(app.listing.current_page, 3);

        app.focus = Focus::Sidebar;
        app.sidebar.cursor = 4;
        app.choose_sidebar_entry();
        assert_eq!(app.selection, Selection::Genre(GenreId(28)));
        assert_eq!(app.route, Route::Home(Some(Selection::Genre(GenreId(28)))));
        assert_eq!(app.listing.current_page, 1);
        assert_eq!(app.focus, Focus::Content);

        pump(&mut app, 1);
        assert_eq!(app.listing.movies[0].title, "28 one");
    }

    #[test]
    fn outdated_page_is_dropped() {
        let mut app = app();
        app.start(Route::default());
        pump(&mut app, 2);
        let old_ticket = app.listing.ticket;

        app.change_page(2);
        app.handle_message(FetchMessage::MoviePage {
            ticket: old_ticket,
            result: Ok(MoviePage {
                page: 1,
                results: vec![summary(99, "Stale")],
                total_pages: 1,
                total_results: 1,
            }),
        });
        assert!(app.is_loading());
        assert!(app.listing.movies.iter().all(|m| m.title != "Stale"));

        pump(&mut app, 1);
        assert_eq!(app.listing.movies[0].id, MovieId(21));
    }

    #[test]
    fn movie_detail_fills_each_section() {
        let mut app = app();
        app.start(Route::Movie(MovieId(550)));
        pump(&mut app, 4);

        let state = app.movie_detail.as_ref().expect("movie view");
        assert_eq!(state.movie.as_ref().map(|m| m.title.as_str()), Some("Fight Club"));
        assert_eq!(state.trailer_key.as_deref(), Some("first"));
        assert_eq!(state.cast.len(), 1);
        assert!(!state.loading_poster, "movie has no poster path");
        assert!(!app.is_loading());
    }

    #[test]
    fn unknown_movie_stays_loading() {
        let mut app = app();
        app.start(Route::Movie(MovieId(1)));
        pump(&mut app, 4);
        assert!(app.is_loading());
        assert!(app.movie_detail.as_ref().is_some_and(|s| s.cast.len() == 1));
    }

    #[test]
    fn list_to_movie_to_actor_and_back() {
        let mut app = app();
        app.start(Route::default());
        pump(&mut app, 2);

        app.open_selected();
        assert_eq!(app.route, Route::Movie(MovieId(11)));

        app.navigate(Route::Movie(MovieId(550)));
        pump(&mut app, 6);
        app.open_selected();
        assert_eq!(app.route, Route::Actor(PersonId(287)));
        assert!(app.movie_detail.is_none());

        assert!(app.back());
        assert_eq!(app.route, Route::Movie(MovieId(550)));
        assert!(app.back());
        assert!(app.back());
        assert_eq!(app.route, Route::Home(None));
        assert!(!app.back());
    }

    #[test]
    fn results_for_a_left_view_are_ignored() {
        let mut app = app();
        app.start(Route::Actor(PersonId(287)));
        let actor_ticket = app.actor_detail.as_ref().map(|s| s.ticket).expect("actor view");

        app.navigate(Route::Home(Some(Selection::Category(Category::Upcoming))));
        assert!(app.actor_detail.is_none());
        app.handle_message(FetchMessage::PersonCredits {
            ticket: actor_ticket,
            result: Ok(Vec::new()),
        });
        assert!(app.actor_detail.is_none());
    }

    #[test]
    fn actor_detail_loads_profile_image() {
        let mut app = app();
        app.start(Route::Actor(PersonId(287)));
        // genres, person, images, credits, then the profile image
        pump(&mut app, 5);

        let state = app.actor_detail.as_ref().expect("actor view");
        assert_eq!(state.person.as_ref().map(|p| p.name.as_str()), Some("Brad Pitt"));
        assert_eq!(state.images.len(), 2);
        assert_eq!(state.credits[0].id, MovieId(550));
        assert_eq!(state.image_path.as_deref(), Some("/pitt.jpg"));
        assert!(!state.loading_profile);
        // no picker in tests, so nothing to render
        assert!(state.profile.is_none());

        app.cycle_actor_image(true);
        pump(&mut app, 1);
        let state = app.actor_detail.as_ref().expect("actor view");
        assert_eq!(state.image_path.as_deref(), Some("/pitt2.jpg"));
        assert!(!state.loading_profile);
    }

    #[test]
    fn missing_api_key_never_fetches() {
        let mut app = App::new(None, None);
        app.start(Route::default());
        assert!(!app.has_api());
        assert!(app.receiver.try_recv().is_err());
        assert!(app.is_loading());
    }
}
