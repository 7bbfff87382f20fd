//! This module defines errors for `GroupApiClient`.

use reqwest::StatusCode;

/// The error type for the group registry client.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum GroupApiClientError {
    /// HTTP request error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization error
    #[error("json deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status
    #[error("unexpected status ({code}): {text}")]
    Status {
        /// HTTP status code
        code: StatusCode,
        /// Response body
        text: String,
    },
}
