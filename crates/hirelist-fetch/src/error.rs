//! Error type for a failed retrieval.

use hyper::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Everything that can stop a fetch before a body is available.
///
/// None of these ever reach the parser; there is no data to parse.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("could not build request: {0}")]
    Request(#[from] hyper::http::Error),

    /// Connection refused, DNS failure, TLS failure and similar.
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("reading response body failed: {0}")]
    Body(#[from] hyper::Error),

    #[error("request to {url} timed out after {after:?}")]
    Timeout { url: String, after: Duration },
}

impl FetchError {
    /// Build a [`FetchError::Network`] whose reason is the full `source()`
    /// chain, so "client error (Connect)" also says what the connect error was.
    pub(crate) fn network(url: &str, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut reason = err.to_string();
        let mut source = err.source();
        while let Some(inner) = source {
            reason.push_str(": ");
            reason.push_str(&inner.to_string());
            source = inner.source();
        }
        FetchError::Network {
            url: url.to_string(),
            reason,
        }
    }

    /// Status code for [`FetchError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
