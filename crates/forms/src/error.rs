//! Error types for the Forms client.

use serde::Deserialize;

/// Result type for Forms client operations.
pub type FormsResult<T> = Result<T, FormsError>;

/// Error types that can occur when talking to the Google Forms API.
#[derive(Debug, thiserror::Error)]
pub enum FormsError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Token refresh failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl FormsError {
    /// Create an API error from a status code and response body.
    ///
    /// Google APIs wrap failures as `{"error": {"code", "message", "status"}}`;
    /// anything else is carried through as the raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(wrapper) = serde_json::from_str::<ErrorBody>(body) {
            Self::Api {
                status,
                message: wrapper.error.message,
            }
        } else {
            Self::Api {
                status,
                message: body.to_string(),
            }
        }
    }
}

/// Error envelope returned by Google APIs.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
