use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::app::format::parse_release_date;
use crate::app::pagination::{MAX_API_PAGE, PageItem, WINDOW_SIZE, page_window};
use crate::app::tmdb::{MoviePage, MovieSummary};
use crate::app::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Default,
    TitleAsc,
    TitleDesc,
    ReleaseAsc,
    ReleaseDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
        SortOrder::ReleaseDesc,
        SortOrder::ReleaseAsc,
        SortOrder::Default,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "" => Some(SortOrder::Default),
            "title" => Some(SortOrder::TitleAsc),
            "-title" => Some(SortOrder::TitleDesc),
            "release_date" => Some(SortOrder::ReleaseAsc),
            "-release_date" => Some(SortOrder::ReleaseDesc),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortOrder::Default => "",
            SortOrder::TitleAsc => "title",
            SortOrder::TitleDesc => "-title",
            SortOrder::ReleaseAsc => "release_date",
            SortOrder::ReleaseDesc => "-release_date",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Default => "Clear",
            SortOrder::TitleAsc => "A-Z",
            SortOrder::TitleDesc => "Z-A",
            SortOrder::ReleaseDesc => "Newest to oldest",
            SortOrder::ReleaseAsc => "Oldest to newest",
        }
    }

    /// Next entry in the order the sort bar lists them.
    pub fn cycle(self) -> Self {
        let idx = Self::ALL.iter().position(|o| *o == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn compare(self, a: &MovieSummary, b: &MovieSummary) -> Ordering {
        match self {
            SortOrder::Default => Ordering::Equal,
            SortOrder::TitleAsc => compare_titles(&a.title, &b.title),
            SortOrder::TitleDesc => compare_titles(&b.title, &a.title),
            SortOrder::ReleaseAsc => release_of(a).cmp(&release_of(b)),
            SortOrder::ReleaseDesc => release_of(b).cmp(&release_of(a)),
        }
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Missing dates sort before every real one.
fn release_of(movie: &MovieSummary) -> Option<NaiveDate> {
    parse_release_date(movie.release_date.as_deref())
}

/// Titles containing `phrase` (case-insensitive), ordered by `order`. The sort is stable,
/// so `SortOrder::Default` keeps the page's own order.
pub fn visible_movies<'a>(
    movies: &'a [MovieSummary],
    phrase: &str,
    order: SortOrder,
) -> Vec<&'a MovieSummary> {
    let needle = phrase.to_lowercase();
    let mut visible: Vec<&MovieSummary> = movies
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .collect();
    visible.sort_by(|a, b| order.compare(a, b));
    visible
}

/// State of the list view: the fetched page plus local filter, sort and paging.
#[derive(Debug)]
pub struct ListingState {
    pub ticket: Ticket,
    pub movies: Vec<MovieSummary>,
    pub loaded: bool,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub search_phrase: String,
    pub searching: bool,
    pub sort_order: SortOrder,
    pub selected: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            ticket: Ticket::default(),
            movies: Vec::new(),
            loaded: false,
            current_page: 1,
            total_pages: 0,
            total_results: 0,
            search_phrase: String::new(),
            searching: false,
            sort_order: SortOrder::Default,
            selected: 0,
        }
    }
}

impl ListingState {
    pub fn visible(&self) -> Vec<&MovieSummary> {
        visible_movies(&self.movies, &self.search_phrase, self.sort_order)
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.visible().get(self.selected).copied()
    }

    /// Highest page that can actually be requested.
    pub fn last_page(&self) -> u32 {
        self.total_pages.min(MAX_API_PAGE)
    }

    pub fn pagination(&self) -> Vec<PageItem> {
        page_window(self.current_page, self.last_page(), WINDOW_SIZE)
    }

    /// Moves to `page` if it is in range and differs from the current one.
    /// Returns whether a new fetch is needed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let last = self.last_page();
        if last == 0 || page < 1 || page > last || page == self.current_page {
            return false;
        }
        self.current_page = page;
        self.selected = 0;
        true
    }

    pub fn apply_page(&mut self, page: MoviePage) {
        self.movies = page.results;
        self.total_pages = page.total_pages;
        self.total_results = page.total_results;
        self.loaded = true;
        self.clamp_selection();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.selected = 0;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_phrase.push(c);
        self.selected = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_phrase.pop();
        self.selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_phrase.clear();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    pub fn select_previous(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            count - 1
        } else {
            self.selected - 1
        };
    }

    fn clamp_selection(&mut self) {
        let count = self.visible().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tmdb::MovieId;

    fn movie(id: u64, title: &str, date: Option<&str>) -> MovieSummary {
        MovieSummary {
            id: MovieId(id),
            title: title.to_string(),
            poster_path: None,
            release_date: date.map(str::to_string),
            vote_average: 7.0,
            overview: String::new(),
        }
    }

    fn sample() -> Vec<MovieSummary> {
        vec![
            movie(1, "The Matrix", Some("1999-03-31")),
            movie(2, "alien", Some("1979-05-25")),
            movie(3, "Matrix Reloaded", Some("2003-05-15")),
            movie(4, "Blade Runner", Some("1982-06-25")),
            movie(5, "Untitled Project", None),
        ]
    }

    fn ids(movies: &[&MovieSummary]) -> Vec<u64> {
        movies.iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_order() {
        let movies = sample();
        assert_eq!(ids(&visible_movies(&movies, "MATRIX", SortOrder::Default)), [1, 3]);
        assert_eq!(ids(&visible_movies(&movies, "", SortOrder::Default)), [1, 2, 3, 4, 5]);
        assert!(visible_movies(&movies, "zzz", SortOrder::Default).is_empty());
    }

    #[test]
    fn title_sorts_ignore_case() {
        let movies = sample();
        assert_eq!(ids(&visible_movies(&movies, "", SortOrder::TitleAsc)), [2, 4, 3, 1, 5]);
        assert_eq!(ids(&visible_movies(&movies, "", SortOrder::TitleDesc)), [5, 1, 3, 4, 2]);
    }

    #[test]
    fn release_sorts_put_missing_dates_first() {
        let movies = sample();
        assert_eq!(ids(&visible_movies(&movies, "", SortOrder::ReleaseAsc)), [5, 2, 4, 1, 3]);
        assert_eq!(ids(&visible_movies(&movies, "", SortOrder::ReleaseDesc)), [3, 1, 4, 2, 5]);
    }

    #[test]
    fn filter_applies_before_sort() {
        let movies = sample();
        assert_eq!(ids(&visible_movies(&movies, "matrix", SortOrder::ReleaseDesc)), [3, 1]);
    }

    #[test]
    fn sort_keys_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_key(order.key()), Some(order));
        }
        assert_eq!(SortOrder::from_key("popularity"), None);
    }

    #[test]
    fn cycle_visits_every_order() {
        let mut order = SortOrder::Default;
        let mut seen = Vec::new();
        for _ in 0..SortOrder::ALL.len() {
            order = order.cycle();
            seen.push(order);
        }
        assert_eq!(seen, SortOrder::ALL);
    }

    #[test]
    fn page_changes_stay_in_range() {
        let mut state = ListingState::default();
        assert!(!state.go_to_page(2), "no paging before the first response");

        state.apply_page(MoviePage {
            page: 1,
            results: sample(),
            total_pages: 900,
            total_results: 18_000,
        });
        assert_eq!(state.last_page(), MAX_API_PAGE);
        assert!(state.go_to_page(2));
        assert!(!state.go_to_page(2));
        assert!(!state.go_to_page(0));
        assert!(!state.go_to_page(501));
        assert!(state.go_to_page(500));
        assert_eq!(state.current_page, 500);
    }

    #[test]
    fn selection_wraps_over_visible_rows() {
        let mut state = ListingState::default();
        state.apply_page(MoviePage {
            page: 1,
            results: sample(),
            total_pages: 1,
            total_results: 5,
        });
        state.push_search_char('m');
        state.push_search_char('a');
        state.push_search_char('t');
        state.select_previous();
        assert_eq!(state.selected_movie().map(|m| m.id.0), Some(3));
        state.select_next();
        assert_eq!(state.selected_movie().map(|m| m.id.0), Some(1));
    }
}
