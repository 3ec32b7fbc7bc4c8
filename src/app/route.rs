use std::fmt;

use crate::app::selection::Selection;
use crate::app::tmdb::{MovieId, PersonId};

/// The three top-level screens, addressed by URL-style paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` or `/?genre=<slug|id>`
    Home(Option<Selection>),
    /// `/movie/:id`
    Movie(MovieId),
    /// `/actor/:id`
    Actor(PersonId),
}

impl Default for Route {
    fn default() -> Self {
        Route::Home(None)
    }
}

impl Route {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };
        let path = path.trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').skip(1).collect();

        if !path.is_empty() && !path.starts_with('/') {
            return None;
        }

        match segments.as_slice() {
            [] => match query {
                None | Some("") => Some(Route::Home(None)),
                Some(query) => parse_home_query(query),
            },
            ["movie", id] if query.is_none() => parse_id(id).map(|id| Route::Movie(MovieId(id))),
            ["actor", id] if query.is_none() => parse_id(id).map(|id| Route::Actor(PersonId(id))),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home(None) => "/".to_string(),
            Route::Home(Some(selection)) => format!("/?genre={}", selection.query_value()),
            Route::Movie(id) => format!("/movie/{id}"),
            Route::Actor(id) => format!("/actor/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|id| *id > 0)
}

fn parse_home_query(query: &str) -> Option<Route> {
    let value = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("genre="))?;
    Selection::from_query_value(value).map(|selection| Route::Home(Some(selection)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::selection::Category;
    use crate::app::tmdb::GenreId;

    #[test]
    fn parses_detail_routes() {
        assert_eq!(Route::parse("/movie/550"), Some(Route::Movie(MovieId(550))));
        assert_eq!(Route::parse("/actor/287/"), Some(Route::Actor(PersonId(287))));
        assert_eq!(Route::parse("/movie/abc"), None);
        assert_eq!(Route::parse("/movie/0"), None);
        assert_eq!(Route::parse("/movie"), None);
        assert_eq!(Route::parse("/series/1"), None);
        assert_eq!(Route::parse("movie/550"), None);
    }

    #[test]
    fn parses_home_with_selection() {
        assert_eq!(Route::parse("/"), Some(Route::Home(None)));
        assert_eq!(Route::parse(""), Some(Route::Home(None)));
        assert_eq!(
            Route::parse("/?genre=upcoming"),
            Some(Route::Home(Some(Selection::Category(Category::Upcoming))))
        );
        assert_eq!(
            Route::parse("/?genre=18"),
            Some(Route::Home(Some(Selection::Genre(GenreId(18)))))
        );
        assert_eq!(Route::parse("/?genre=bogus"), None);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home(None),
            Route::Home(Some(Selection::Category(Category::TopRated))),
            Route::Home(Some(Selection::Genre(GenreId(878)))),
            Route::Movie(MovieId(550)),
            Route::Actor(PersonId(287)),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
        assert_eq!(Route::Movie(MovieId(550)).path(), "/movie/550");
    }
}
