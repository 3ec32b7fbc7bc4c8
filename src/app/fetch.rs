use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::{Context, Result};
use image::DynamicImage;

use crate::app::Ticket;
use crate::app::selection::Selection;
use crate::app::tmdb::{
    CastMember, Genre, Movie, MovieCredit, MovieId, MoviePage, Person, PersonId, ProfileImage,
    TmdbApi,
};

/// Which panel a downloaded image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    MoviePoster,
    ActorProfile,
}

/// Results coming back from worker threads. Everything except the genre list is tagged
/// with the ticket of the view that asked for it.
pub enum FetchMessage {
    Genres(Result<Vec<Genre>>),
    MoviePage {
        ticket: Ticket,
        result: Result<MoviePage>,
    },
    Movie {
        ticket: Ticket,
        result: Result<Movie>,
    },
    Trailer {
        ticket: Ticket,
        result: Result<Option<String>>,
    },
    Cast {
        ticket: Ticket,
        result: Result<Vec<CastMember>>,
    },
    Person {
        ticket: Ticket,
        result: Result<Person>,
    },
    PersonImages {
        ticket: Ticket,
        result: Result<Vec<ProfileImage>>,
    },
    PersonCredits {
        ticket: Ticket,
        result: Result<Vec<MovieCredit>>,
    },
    Image {
        ticket: Ticket,
        slot: ImageSlot,
        path: String,
        result: Result<DynamicImage>,
    },
}

/// Spawns one thread per request. A closed receiver just means the app is gone.
#[derive(Clone)]
pub struct Fetcher {
    api: Arc<dyn TmdbApi>,
    sender: Sender<FetchMessage>,
}

impl Fetcher {
    pub fn new(api: Arc<dyn TmdbApi>, sender: Sender<FetchMessage>) -> Self {
        Self { api, sender }
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&dyn TmdbApi) -> FetchMessage + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let _ = sender.send(job(api.as_ref()));
        });
    }

    pub fn genres(&self) {
        self.spawn(|api| FetchMessage::Genres(api.genres().context("fetching genres")));
    }

    pub fn movie_page(&self, ticket: Ticket, selection: Selection, page: u32) {
        self.spawn(move |api| FetchMessage::MoviePage {
            ticket,
            result: api
                .movie_page(selection, page)
                .with_context(|| format!("fetching page {page} of {selection}")),
        });
    }

    /// Movie, trailer and cast race independently; each updates its own section.
    pub fn movie_detail(&self, ticket: Ticket, id: MovieId) {
        self.spawn(move |api| FetchMessage::Movie {
            ticket,
            result: api.movie(id).with_context(|| format!("fetching movie {id}")),
        });
        self.spawn(move |api| FetchMessage::Trailer {
            ticket,
            result: api
                .movie_videos(id)
                .map(|videos| videos.into_iter().next().map(|video| video.key))
                .with_context(|| format!("fetching videos for movie {id}")),
        });
        self.spawn(move |api| FetchMessage::Cast {
            ticket,
            result: api
                .movie_cast(id)
                .with_context(|| format!("fetching credits for movie {id}")),
        });
    }

    pub fn actor_detail(&self, ticket: Ticket, id: PersonId) {
        self.spawn(move |api| FetchMessage::Person {
            ticket,
            result: api.person(id).with_context(|| format!("fetching person {id}")),
        });
        self.spawn(move |api| FetchMessage::PersonImages {
            ticket,
            result: api
                .person_images(id)
                .with_context(|| format!("fetching images for person {id}")),
        });
        self.spawn(move |api| FetchMessage::PersonCredits {
            ticket,
            result: api
                .person_movie_credits(id)
                .with_context(|| format!("fetching movie credits for person {id}")),
        });
    }

    pub fn image(&self, ticket: Ticket, slot: ImageSlot, path: String) {
        self.spawn(move |api| {
            let result = download_image(api, &path);
            FetchMessage::Image {
                ticket,
                slot,
                path,
                result,
            }
        });
    }
}

fn download_image(api: &dyn TmdbApi, path: &str) -> Result<DynamicImage> {
    let bytes = api.image(path)?;
    image::load_from_memory(&bytes).with_context(|| format!("decoding image {path}"))
}
