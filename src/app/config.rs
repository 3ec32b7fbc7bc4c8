use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

pub const TMDB_BASE: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

const LOG_DIR_NAME: &str = "cinema_catalog";
const LOG_FILE_NAME: &str = "cinema_catalog.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub language: String,
    pub api_base: String,
    pub image_base: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            language: String::from("en-US"),
            api_base: TMDB_BASE.to_string(),
            image_base: IMAGE_BASE.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl Config {
    /// Reads `TMDB_API_KEY` from the process environment, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {:?}", path),
            Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
        }

        Self {
            api_key: normalize_key(env::var("TMDB_API_KEY").ok()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = normalize_key(Some(api_key.into()));
        self
    }
}

fn normalize_key(raw: Option<String>) -> Option<String> {
    raw.map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Log file inside the user's cache dir, e.g. `~/.cache/cinema_catalog/cinema_catalog.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let config = Config::default().with_api_key("   ");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn api_key_is_trimmed() {
        let config = Config::default().with_api_key(" abc123\n");
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn defaults_point_at_tmdb() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://api.themoviedb.org/3");
        assert_eq!(config.image_base, "https://image.tmdb.org/t/p");
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn log_file_lives_in_its_own_cache_dir() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("cinema_catalog/cinema_catalog.log"));
        }
    }
}
