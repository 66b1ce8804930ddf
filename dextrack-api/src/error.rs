use std::time::Duration;

use dextrack_core::StorageError;

/// Failure of a single HTTP fetch.
///
/// Carries only plain data so a failed attempt can be logged, compared,
/// and surfaced after the retry budget runs out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid JSON response: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn network(msg: impl std::fmt::Display) -> Self {
        Self::Network(msg.to_string())
    }

    pub fn parse(msg: impl std::fmt::Display) -> Self {
        Self::Parse(msg.to_string())
    }

    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced by catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The upstream catalog has no such entry (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The payload parsed as JSON but not into the expected shape
    #[error("Unexpected payload from {url}: {message}")]
    Malformed { url: String, message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CatalogError {
    pub fn malformed(url: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Malformed {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
