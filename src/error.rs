//! Failure taxonomy for the reply fetch.

use reqwest::StatusCode;
use thiserror::Error;

/// Every way a reply fetch can fail. The chat panel collapses all of them
/// into one transcript message; the variant only reaches the log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed reply body: {0}")]
    Decode(#[from] serde_json::Error),
}
