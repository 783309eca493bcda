/// Errors from the HTTP fetch layer.
use thiserror::Error;

/// Typed failures of a single fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, timeout or body-read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} answered HTTP {status}")]
    Status {
        /// Final URL of the request.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not the expected JSON document.
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
