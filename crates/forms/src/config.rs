//! Configuration types for the Forms client.

use crate::error::{FormsError, FormsResult};
use std::time::Duration;
use url::Url;

/// Default Google Forms API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://forms.googleapis.com";

/// Default OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Configuration for the Forms client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Forms API.
    pub base_url: Url,
    /// OAuth token exchange endpoint.
    pub token_url: Url,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // Compile-time constants, known to parse
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            token_url: Url::parse(DEFAULT_TOKEN_URL).unwrap(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// OAuth client credentials plus the long-lived refresh token.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credentials {
    /// Load credentials from the environment.
    ///
    /// All three variables are required; a missing one is a configuration
    /// error and the caller must not start serving.
    pub fn from_env() -> FormsResult<Self> {
        Ok(Self {
            client_id: require_env("GOOGLE_CLIENT_ID")?,
            client_secret: require_env("GOOGLE_CLIENT_SECRET")?,
            refresh_token: require_env("GOOGLE_REFRESH_TOKEN")?,
        })
    }
}

fn require_env(name: &str) -> FormsResult<String> {
    std::env::var(name)
        .map_err(|_| FormsError::Config(format!("missing required environment variable {}", name)))
}
