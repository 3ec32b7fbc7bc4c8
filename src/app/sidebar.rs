use crate::app::comments::CommentBoard;
use crate::app::selection::{Category, Selection};
use crate::app::tmdb::Genre;

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub selection: Selection,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct SidebarState {
    pub genres: Vec<Genre>,
    pub cursor: usize,
    pub comments: CommentBoard,
}

impl SidebarState {
    /// Fixed categories first, then genres in the order TMDB returned them.
    pub fn entries(&self) -> Vec<SidebarEntry> {
        Category::ALL
            .into_iter()
            .map(|category| SidebarEntry {
                selection: Selection::Category(category),
                label: category.label().to_string(),
            })
            .chain(self.genres.iter().map(|genre| SidebarEntry {
                selection: Selection::Genre(genre.id),
                label: genre.name.clone(),
            }))
            .collect()
    }

    pub fn entry_under_cursor(&self) -> Option<SidebarEntry> {
        self.entries().into_iter().nth(self.cursor)
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let count = Category::ALL.len() + self.genres.len();
        self.cursor = if forward {
            (self.cursor + 1) % count
        } else if self.cursor == 0 {
            count - 1
        } else {
            self.cursor - 1
        };
    }

    /// Puts the cursor on `selection` if it is listed.
    pub fn focus_selection(&mut self, selection: Selection) {
        if let Some(idx) = self
            .entries()
            .iter()
            .position(|entry| entry.selection == selection)
        {
            self.cursor = idx;
        }
    }

    /// Label for a selection, resolving genre ids to names once they are known.
    pub fn label_for(&self, selection: Selection) -> String {
        match selection {
            Selection::Category(category) => category.label().to_string(),
            Selection::Genre(id) => self
                .genres
                .iter()
                .find(|genre| genre.id == id)
                .map(|genre| genre.name.clone())
                .unwrap_or_else(|| selection.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tmdb::GenreId;

    fn sidebar() -> SidebarState {
        SidebarState {
            genres: vec![
                Genre {
                    id: GenreId(28),
                    name: "Action".into(),
                },
                Genre {
                    id: GenreId(35),
                    name: "Comedy".into(),
                },
            ],
            ..SidebarState::default()
        }
    }

    #[test]
    fn categories_come_before_genres() {
        let labels: Vec<_> = sidebar().entries().into_iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["Popular", "Upcoming", "Top rated", "Now Playing", "Action", "Comedy"]
        );
    }

    #[test]
    fn cursor_wraps() {
        let mut state = sidebar();
        state.move_cursor(false);
        assert_eq!(
            state.entry_under_cursor().map(|e| e.selection),
            Some(Selection::Genre(GenreId(35)))
        );
        state.move_cursor(true);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn genre_labels_resolve_by_id() {
        let state = sidebar();
        assert_eq!(state.label_for(Selection::Genre(GenreId(35))), "Comedy");
        assert_eq!(state.label_for(Selection::Genre(GenreId(99))), "Genre 99");
        assert_eq!(
            state.label_for(Selection::Category(Category::TopRated)),
            "Top rated"
        );
    }

    #[test]
    fn focus_selection_moves_cursor() {
        let mut state = sidebar();
        state.focus_selection(Selection::Genre(GenreId(28)));
        assert_eq!(state.cursor, 4);
    }
}
