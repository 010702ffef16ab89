//! Error types for HTTP and address fetching operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level without dictating
/// recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for external address lookups.
///
/// Every failed lookup is represented here; a successful lookup always
/// yields a non-empty address.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be delivered or the body could not be read.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The check service answered with a non-success status code.
    #[error("Check service returned status {0}")]
    Status(http::StatusCode),

    /// The response body is not valid UTF-8.
    #[error("Check service returned a non-UTF-8 body")]
    NotUtf8,

    /// The response body was empty after trimming.
    #[error("Check service returned an empty body")]
    EmptyBody,
}

impl FetchError {
    /// Returns true if the failure should be shown to the user.
    ///
    /// An empty body is treated as "nothing to report" and only logged.
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        !matches!(self, Self::EmptyBody)
    }
}
