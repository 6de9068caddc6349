use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (DNS, connect, reset, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a status other than 200.
    #[error("API returned status {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// The response body did not match the expected wire shape.
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}
