//! Failure of a call against the remote store.

use thiserror::Error;

/// Any failure talking to the remote store.
///
/// Each call is attempted exactly once, so every variant is terminal for
/// the call that produced it.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("{method} {url} failed: {source}")]
    Network {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// The response body was not the expected JSON.
    #[error("Failed to decode response of {method} {url}: {source}")]
    Decode {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
