//! Deezer API client error types.

use thiserror::Error;

/// Errors produced by catalog client operations.
///
/// The four failure classes are kept distinct so callers can tell a
/// transport problem apart from a server refusal, an in-band API error
/// payload, or a body that could not be understood.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum DeezerError {
    /// Connection-level failure (refused, DNS, timeout) before or while
    /// reading a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status. The body is
    /// not inspected in this case.
    #[error("API returned status {0}")]
    Status(u16),

    /// A 2xx response carried an error envelope instead of content.
    #[error("API error: {message}")]
    Api {
        /// Upstream error category (`exception` family).
        kind: String,
        /// Human-readable message from the API.
        message: String,
        /// Upstream error code (not an HTTP status).
        code: i64,
    },

    /// The response body did not match the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be constructed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Client construction failed (builder misuse).
    #[error("{0}")]
    Config(String),
}

/// Convenience alias for `Result<T, DeezerError>`.
pub type Result<T> = std::result::Result<T, DeezerError>;
