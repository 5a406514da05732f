//! Upstream failure modes.

use reqwest::StatusCode;
use thiserror::Error;

/// Longest slice of an upstream error body kept in the error detail.
const MAX_BODY_CHARS: usize = 512;

/// Errors that can occur while calling the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Call did not complete within its deadline.
    #[error("upstream call timed out after {0} seconds")]
    Timeout(u64),

    /// Upstream answered with a non-2xx status.
    #[error("Coinbase API error: {status} for url '{url}': {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// Connection, TLS or protocol failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// 2xx body was not the expected JSON.
    #[error("malformed upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configured base URL is unusable.
    #[error("invalid upstream base URL: {0}")]
    BaseUrl(String),

    /// HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Classify a `reqwest` failure, treating its own timeouts as deadline misses.
    pub fn from_reqwest(err: reqwest::Error, deadline_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(deadline_secs)
        } else {
            Self::Transport(err)
        }
    }

    /// Build a status error, trimming the body to a loggable size.
    pub fn status(status: StatusCode, url: impl Into<String>, body: &str) -> Self {
        let body = body.trim();
        let body = if body.is_empty() {
            status.canonical_reason().unwrap_or("no response body").to_string()
        } else {
            body.chars().take(MAX_BODY_CHARS).collect()
        };
        Self::Status {
            status,
            url: url.into(),
            body,
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
