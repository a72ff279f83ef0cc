//! Configuration management for the client.

use jokebox_engine::{SortPolicy, DEFAULT_ATTEMPTS_FACTOR};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default joke source endpoint.
pub const DEFAULT_API_URL: &str = "https://icanhazdadjoke.com/";

/// Default number of jokes per fetch.
pub const DEFAULT_FETCH_COUNT: usize = 10;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Joke source endpoint
    pub api_url: String,
    /// Directory holding persisted state
    pub data_dir: PathBuf,
    /// Jokes requested by a plain `fetch`
    pub fetch_count: usize,
    /// Attempts allowed per requested joke
    pub max_attempts_factor: usize,
    /// Timeout for a single joke request
    pub request_timeout: Duration,
    /// Ordering applied after each fetch
    pub sort_policy: SortPolicy,
    /// Fetch a first batch at startup when nothing was persisted
    pub fetch_on_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(".jokebox"),
            fetch_count: DEFAULT_FETCH_COUNT,
            max_attempts_factor: DEFAULT_ATTEMPTS_FACTOR,
            request_timeout: Duration::from_secs(10),
            sort_policy: SortPolicy::VotesDescending,
            fetch_on_empty: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("JOKEBOX_API_URL").unwrap_or(defaults.api_url);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_url));
        }

        let data_dir = lookup("JOKEBOX_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let fetch_count = parse_positive(&lookup, "JOKEBOX_FETCH_COUNT", defaults.fetch_count)?;
        let max_attempts_factor = parse_positive(
            &lookup,
            "JOKEBOX_MAX_ATTEMPTS_FACTOR",
            defaults.max_attempts_factor,
        )?;
        let timeout_secs = parse_positive(
            &lookup,
            "JOKEBOX_REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs() as usize,
        )?;

        let sort_policy = match lookup("JOKEBOX_SORT").as_deref() {
            None | Some("votes") => SortPolicy::VotesDescending,
            Some("insertion") => SortPolicy::InsertionOrder,
            Some(other) => return Err(ConfigError::InvalidSort(other.to_string())),
        };

        let fetch_on_empty = match lookup("JOKEBOX_FETCH_ON_EMPTY").as_deref() {
            None => defaults.fetch_on_empty,
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            Some(_) => return Err(ConfigError::Invalid("JOKEBOX_FETCH_ON_EMPTY")),
        };

        Ok(Self {
            api_url,
            data_dir,
            fetch_count,
            max_attempts_factor,
            request_timeout: Duration::from_secs(timeout_secs as u64),
            sort_policy,
            fetch_on_empty,
        })
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::Invalid(key)),
        },
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {0} value")]
    Invalid(&'static str),

    #[error("JOKEBOX_API_URL must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),

    #[error("JOKEBOX_SORT must be 'votes' or 'insertion', got {0:?}")]
    InvalidSort(String),
}
