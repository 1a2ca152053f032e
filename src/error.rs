// src/error.rs

//! Unified error handling for the archive client.

use thiserror::Error;

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Soft failures (a title without a date or issue number) are not errors;
/// they surface as `None` in the result types. Everything here is fatal to
/// the fetch call that raised it — no partial catalog or issue page is ever
/// returned.
#[derive(Error, Debug)]
pub enum AppError {
    /// Non-success HTTP status from the archive
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// HTTP request failed before a status was available
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape for the endpoint
    #[error("Schema mismatch for {endpoint}: {source}")]
    Schema {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Book detail URL did not follow the `/books/<id>` contract
    #[error("Unknown book URL: {0}")]
    BookUrl(String),

    /// Catalog month name not found in the stand-alone vocabulary
    #[error("Unknown month name: {0:?}")]
    MonthName(String),

    /// Title matched the date pattern but the components form no valid date
    #[error("Invalid date {year:04}-{month:02}-{day:02} extracted from {title:?}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        title: String,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a schema error for an endpoint.
    pub fn schema(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Schema {
            endpoint: endpoint.into(),
            source,
        }
    }
}
