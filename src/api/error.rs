//! Error types for webhook API calls.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for webhook API operations.
///
/// Only [`ApiError::Http`] can occur after a request has been handed to the
/// transport; the remaining variants are raised while building the request
/// and mean nothing was sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed; passed through unchanged.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The payload could not be JSON-encoded.
    #[error("Failed to encode JSON payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// A token or audit log reason is not a valid header value.
    #[error("Invalid value for header '{name}': {source}")]
    InvalidHeader {
        /// Header the value was destined for
        name: &'static str,
        /// Underlying header error
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    /// The API base URL cannot carry path segments (e.g. `mailto:`).
    #[error("API base '{base}' cannot be used to build endpoint URLs")]
    InvalidApiBase {
        /// The offending base URL
        base: String,
    },
}
