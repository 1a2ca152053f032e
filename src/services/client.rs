// src/services/client.rs

//! The archive HTTP client: transport setup, status checking, JSON decode.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{AppError, Result};

/// Client for the Nekrasovka archive API.
///
/// Holds a configured `reqwest::Client` and nothing else; calls share no
/// state and may be issued concurrently. The client never retries and
/// keeps no cache.
pub struct ArchiveClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl ArchiveClient {
    /// Create a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Create a client pointed at the live archive with default settings.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Build an absolute endpoint URL from a path relative to the API root.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_root(), path)
    }

    /// Issue a GET and require a success status.
    pub(crate) async fn get_checked(&self, url: &str) -> Result<reqwest::Response> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// GET an endpoint and decode its body against the wire shape `T`.
    ///
    /// The whole body is validated in one pass before any field is used;
    /// a shape mismatch fails the fetch with the serde error naming the
    /// offending field.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_checked(url).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| AppError::schema(url, e))
    }

    /// Fetch the original scan of one page of a book.
    ///
    /// Returns the raw response so the caller can stream the image bytes;
    /// the client does no image processing.
    pub async fn fetch_original_image(
        &self,
        book_id: &str,
        page_num: u32,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(&format!("books/{book_id}/pages/{page_num}/img/original"));
        self.get_checked(&url).await
    }
}
