use std::fmt;

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::app::config::Config;
use crate::app::selection::Selection;

const POSTER_SIZE: &str = "w500";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct GenreId(pub u64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

/// One row of a listing page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<MovieSummary>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub biography: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileImage {
    pub file_path: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieCredit {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub character: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
}

#[derive(Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

#[derive(Deserialize)]
struct VideosResponse {
    #[serde(default)]
    results: Vec<Video>,
}

#[derive(Deserialize)]
struct MovieCreditsResponse {
    #[serde(default)]
    cast: Vec<CastMember>,
}

#[derive(Deserialize)]
struct PersonImagesResponse {
    #[serde(default)]
    profiles: Vec<ProfileImage>,
}

#[derive(Deserialize)]
struct PersonCreditsResponse {
    #[serde(default)]
    cast: Vec<MovieCredit>,
}

/// Every TMDB call the catalog makes. Calls block; the app runs them on worker threads.
pub trait TmdbApi: Send + Sync {
    fn genres(&self) -> Result<Vec<Genre>>;
    fn movie_page(&self, selection: Selection, page: u32) -> Result<MoviePage>;
    fn movie(&self, id: MovieId) -> Result<Movie>;
    fn movie_videos(&self, id: MovieId) -> Result<Vec<Video>>;
    fn movie_cast(&self, id: MovieId) -> Result<Vec<CastMember>>;
    fn person(&self, id: PersonId) -> Result<Person>;
    fn person_images(&self, id: PersonId) -> Result<Vec<ProfileImage>>;
    fn person_movie_credits(&self, id: PersonId) -> Result<Vec<MovieCredit>>;
    /// Raw bytes of an image from the CDN, `path` being the API's `/abc.jpg` suffix.
    fn image(&self, path: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    language: String,
    api_base: String,
    image_base: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| anyhow!("TMDB_API_KEY not set"))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            language: config.language.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            image_base: config.image_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}&language={}",
            self.api_base,
            endpoint,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.language)
        );
        for (name, value) in params {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    pub fn image_url(&self, path: &str) -> String {
        format!("{}/{}{}", self.image_base, POSTER_SIZE, path)
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint_url(endpoint, params);
        debug!(endpoint, "GET");
        self.client
            .get(&url)
            .send()
            .with_context(|| format!("request to {endpoint} failed"))?
            .error_for_status()
            .with_context(|| format!("TMDB returned an error for {endpoint}"))?
            .json::<T>()
            .with_context(|| format!("failed to decode response from {endpoint}"))
    }
}

impl TmdbApi for TmdbClient {
    fn genres(&self) -> Result<Vec<Genre>> {
        let data: GenreListResponse = self.get_json("/genre/movie/list", &[])?;
        Ok(data.genres)
    }

    fn movie_page(&self, selection: Selection, page: u32) -> Result<MoviePage> {
        let page = page.to_string();
        match selection {
            Selection::Category(category) => {
                let endpoint = format!("/movie/{}", category.api_path());
                self.get_json(&endpoint, &[("page", page)])
            }
            Selection::Genre(genre) => self.get_json(
                "/discover/movie",
                &[("with_genres", genre.0.to_string()), ("page", page)],
            ),
        }
    }

    fn movie(&self, id: MovieId) -> Result<Movie> {
        self.get_json(&format!("/movie/{id}"), &[])
    }

    fn movie_videos(&self, id: MovieId) -> Result<Vec<Video>> {
        let data: VideosResponse = self.get_json(&format!("/movie/{id}/videos"), &[])?;
        Ok(data.results)
    }

    fn movie_cast(&self, id: MovieId) -> Result<Vec<CastMember>> {
        let data: MovieCreditsResponse = self.get_json(&format!("/movie/{id}/credits"), &[])?;
        Ok(data.cast)
    }

    fn person(&self, id: PersonId) -> Result<Person> {
        self.get_json(&format!("/person/{id}"), &[])
    }

    fn person_images(&self, id: PersonId) -> Result<Vec<ProfileImage>> {
        let data: PersonImagesResponse = self.get_json(&format!("/person/{id}/images"), &[])?;
        Ok(data.profiles)
    }

    fn person_movie_credits(&self, id: PersonId) -> Result<Vec<MovieCredit>> {
        let data: PersonCreditsResponse =
            self.get_json(&format!("/person/{id}/movie_credits"), &[])?;
        Ok(data.cast)
    }

    fn image(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.image_url(path);
        debug!(path, "GET image");
        let bytes = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("failed to download image {path}"))?
            .error_for_status()
            .with_context(|| format!("image CDN returned an error for {path}"))?
            .bytes()
            .with_context(|| format!("failed to read image {path}"))?;
        Ok(bytes.to_vec())
    }
}
