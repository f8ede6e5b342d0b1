//! Error types for the GitHub API client
//!
//! Errors fall into two groups: local request-construction failures that are
//! surfaced before any network call, and transport/decode failures reported
//! by the server or the HTTP stack.

use reqwest::StatusCode;
use thiserror::Error;

use crate::response::ResponseMeta;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all client operations
#[derive(Error, Debug)]
pub enum Error {
    /// Request path could not be resolved against the API base URL
    #[error("Invalid request path '{path}': {source}. Paths must be relative to the API base URL.")]
    Url {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// Request body could not be serialized to JSON
    #[error("Failed to serialize request body: {0}")]
    Body(#[source] serde_json::Error),

    /// HTTP request failed (connection, timeout, protocol)
    #[error("Network request failed: {0}. Check your connection and the API base URL.")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("GitHub API error ({status}): {message}")]
    Api {
        status: StatusCode,
        /// Message decoded from the error body, or the canonical status text
        message: String,
        /// Link to the relevant API documentation, when the server provides one
        documentation_url: Option<String>,
        /// Response metadata captured before the error was raised
        meta: ResponseMeta,
    },

    /// Response body was not valid JSON for the expected type
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or builder arguments.")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The HTTP status carried by this error, if the server got far enough
    /// to produce one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status(),
            _ => None,
        }
    }
}
