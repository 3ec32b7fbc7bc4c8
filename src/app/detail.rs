use ratatui_image::protocol::StatefulProtocol;

use crate::app::Ticket;
use crate::app::tmdb::{CastMember, Movie, MovieCredit, Person, ProfileImage};

pub struct MovieDetailState {
    pub ticket: Ticket,
    pub movie: Option<Movie>,
    pub trailer_key: Option<String>,
    pub cast: Vec<CastMember>,
    pub selected_cast: usize,
    pub poster: Option<StatefulProtocol>,
    pub loading_poster: bool,
}

impl MovieDetailState {
    pub fn new(ticket: Ticket) -> Self {
        Self {
            ticket,
            movie: None,
            trailer_key: None,
            cast: Vec::new(),
            selected_cast: 0,
            poster: None,
            loading_poster: false,
        }
    }

    pub fn selected_cast_member(&self) -> Option<&CastMember> {
        self.cast.get(self.selected_cast)
    }

    pub fn select_next(&mut self) {
        self.selected_cast = step(self.selected_cast, self.cast.len(), true);
    }

    pub fn select_previous(&mut self) {
        self.selected_cast = step(self.selected_cast, self.cast.len(), false);
    }
}

pub struct ActorDetailState {
    pub ticket: Ticket,
    pub person: Option<Person>,
    pub images: Vec<ProfileImage>,
    pub credits: Vec<MovieCredit>,
    pub selected_credit: usize,
    /// CDN path of the picture currently shown, `None` means the placeholder.
    pub image_path: Option<String>,
    pub profile: Option<StatefulProtocol>,
    pub loading_profile: bool,
}

impl ActorDetailState {
    pub fn new(ticket: Ticket) -> Self {
        Self {
            ticket,
            person: None,
            images: Vec::new(),
            credits: Vec::new(),
            selected_credit: 0,
            image_path: None,
            profile: None,
            loading_profile: false,
        }
    }

    pub fn selected_credit(&self) -> Option<&MovieCredit> {
        self.credits.get(self.selected_credit)
    }

    pub fn select_next(&mut self) {
        self.selected_credit = step(self.selected_credit, self.credits.len(), true);
    }

    pub fn select_previous(&mut self) {
        self.selected_credit = step(self.selected_credit, self.credits.len(), false);
    }

    /// Position of the shown picture within `images`, if it is one of them.
    pub fn image_index(&self) -> Option<usize> {
        let path = self.image_path.as_deref()?;
        self.images.iter().position(|image| image.file_path == path)
    }

    /// Moves to the next or previous profile picture. Returns the path to download
    /// when the picture changed.
    pub fn cycle_image(&mut self, forward: bool) -> Option<String> {
        if self.images.is_empty() {
            return None;
        }
        let next = match self.image_index() {
            Some(idx) => step(idx, self.images.len(), forward),
            None => 0,
        };
        let path = self.images[next].file_path.clone();
        if self.image_path.as_deref() == Some(path.as_str()) {
            return None;
        }
        self.image_path = Some(path.clone());
        self.profile = None;
        self.loading_profile = true;
        Some(path)
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(path: &str) -> ProfileImage {
        ProfileImage {
            file_path: path.to_string(),
            width: 500,
            height: 750,
        }
    }

    #[test]
    fn step_wraps_both_ways() {
        assert_eq!(step(0, 3, true), 1);
        assert_eq!(step(2, 3, true), 0);
        assert_eq!(step(0, 3, false), 2);
        assert_eq!(step(0, 0, true), 0);
    }

    #[test]
    fn cycling_images_starts_from_profile_path() {
        let mut state = ActorDetailState::new(Ticket(1));
        state.images = vec![image("/a.jpg"), image("/b.jpg"), image("/c.jpg")];
        state.image_path = Some("/a.jpg".into());

        assert_eq!(state.cycle_image(true).as_deref(), Some("/b.jpg"));
        assert!(state.loading_profile);
        assert_eq!(state.cycle_image(false).as_deref(), Some("/a.jpg"));
        assert_eq!(state.cycle_image(false).as_deref(), Some("/c.jpg"));
    }

    #[test]
    fn cycling_from_placeholder_picks_first_image() {
        let mut state = ActorDetailState::new(Ticket(1));
        assert_eq!(state.cycle_image(true), None);

        state.images = vec![image("/only.jpg")];
        assert_eq!(state.cycle_image(true).as_deref(), Some("/only.jpg"));
        assert_eq!(state.cycle_image(true), None, "single image does not reload");
    }
}
