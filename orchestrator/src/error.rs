//! Error types for remote API operations.
//!
//! Mutation calls propagate these errors to the caller; read-all calls go
//! through the retry wrapper instead and degrade to empty results.

use thiserror::Error;

/// Error raised when a remote API operation cannot complete.
#[derive(Debug, Error)]
pub enum Error {
    /// The remote API answered with a non-success status code.
    #[error("remote API returned {status}: {detail}")]
    Remote {
        /// HTTP status code from the remote API
        status: u16,
        /// Error detail extracted from the response body
        detail: String,
    },

    /// The HTTP request itself failed (connect, timeout, TLS, decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request body could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The API key does not carry a datacenter suffix (`<key>-<dc>`).
    #[error("malformed API key: expected `<key>-<datacenter>`")]
    MalformedApiKey,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a remote error for tests and response mapping.
    pub fn remote(status: u16, detail: impl Into<String>) -> Self {
        Error::Remote {
            status,
            detail: detail.into(),
        }
    }
}
