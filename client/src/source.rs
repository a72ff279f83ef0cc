//! Joke sources.
//!
//! A source hands out one joke text per call. The HTTP source talks to an
//! icanhazdadjoke-compatible endpoint.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;

/// Errors while fetching a single joke.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("joke API answered with status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Something that produces jokes, one per call.
#[async_trait]
pub trait JokeSource: Send {
    /// Fetch a single joke text.
    async fn fetch_joke(&mut self) -> Result<String, SourceError>;
}

/// Response body of the joke API. Only `joke` is used.
#[derive(Debug, Deserialize)]
pub struct JokeResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub joke: String,
}

impl JokeResponse {
    /// Decode a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, SourceError> {
        serde_json::from_slice(body).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

/// Joke source backed by an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpJokeSource {
    client: reqwest::Client,
    url: String,
}

impl HttpJokeSource {
    /// Create a source for `url` with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("jokebox/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl JokeSource for HttpJokeSource {
    async fn fetch_joke(&mut self) -> Result<String, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let decoded = JokeResponse::from_slice(&body)?;
        tracing::trace!(id = ?decoded.id, "fetched joke");

        Ok(decoded.joke)
    }
}
