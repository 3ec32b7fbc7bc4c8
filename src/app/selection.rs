use std::fmt;

use crate::app::tmdb::GenreId;

/// The four fixed listing buckets TMDB exposes under `/movie/{category}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Popular,
    Upcoming,
    TopRated,
    NowPlaying,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Popular,
        Category::Upcoming,
        Category::TopRated,
        Category::NowPlaying,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::Upcoming => "upcoming",
            Category::TopRated => "top-rated",
            Category::NowPlaying => "now-playing",
        }
    }

    pub fn api_path(self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::Upcoming => "upcoming",
            Category::TopRated => "top_rated",
            Category::NowPlaying => "now_playing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Popular => "Popular",
            Category::Upcoming => "Upcoming",
            Category::TopRated => "Top rated",
            Category::NowPlaying => "Now Playing",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }
}

/// What the list view is currently showing: a fixed category or one genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Category(Category),
    Genre(GenreId),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Category(Category::Popular)
    }
}

impl Selection {
    /// Parses the value of a `?genre=` query: a category slug or a numeric genre id.
    pub fn from_query_value(value: &str) -> Option<Self> {
        if let Some(category) = Category::from_slug(value) {
            return Some(Selection::Category(category));
        }
        value
            .parse::<u64>()
            .ok()
            .filter(|id| *id > 0)
            .map(|id| Selection::Genre(GenreId(id)))
    }

    pub fn query_value(&self) -> String {
        match self {
            Selection::Category(category) => category.slug().to_string(),
            Selection::Genre(id) => id.0.to_string(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Category(category) => f.write_str(category.label()),
            Selection::Genre(id) => write!(f, "Genre {}", id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_and_api_paths_differ_only_in_separator() {
        for category in Category::ALL {
            assert_eq!(category.slug().replace('-', "_"), category.api_path());
        }
    }

    #[test]
    fn query_value_distinguishes_categories_from_genres() {
        assert_eq!(
            Selection::from_query_value("top-rated"),
            Some(Selection::Category(Category::TopRated))
        );
        assert_eq!(
            Selection::from_query_value("28"),
            Some(Selection::Genre(GenreId(28)))
        );
        assert_eq!(Selection::from_query_value("top_rated"), None);
        assert_eq!(Selection::from_query_value("0"), None);
        assert_eq!(Selection::from_query_value(""), None);
    }

    #[test]
    fn query_value_round_trips() {
        for selection in [
            Selection::Category(Category::NowPlaying),
            Selection::Genre(GenreId(878)),
        ] {
            assert_eq!(
                Selection::from_query_value(&selection.query_value()),
                Some(selection)
            );
        }
    }

    #[test]
    fn default_is_popular() {
        assert_eq!(Selection::default(), Selection::Category(Category::Popular));
    }
}
