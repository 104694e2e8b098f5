/// Error types for the dashboard API client
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a dashboard fetch. All variants are presented to the user the
/// same way; the distinction only matters for the log.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("{endpoint} endpoint returned {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Configured endpoint could not be turned into a URL
    #[error("Invalid endpoint URL {url:?}: {reason}")]
    Url { url: String, reason: String },
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
