//! OAuth access token handling.
//!
//! The Forms API wants a short-lived bearer token on every request. The
//! provider here exchanges a long-lived refresh token for access tokens and
//! caches them until shortly before expiry; refresh scheduling is entirely
//! its concern, callers just ask for a token.

use crate::config::Credentials;
use crate::error::{FormsError, FormsResult};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

/// Safety margin subtracted from the reported token lifetime.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Supplies a bearer token for outbound API calls.
#[async_trait::async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> FormsResult<String>;
}

/// Provider that exchanges an OAuth refresh token for access tokens.
pub struct OauthTokenProvider {
    http: reqwest::Client,
    token_url: Url,
    credentials: Credentials,
    cached: Mutex<Option<CachedToken>>,
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

impl OauthTokenProvider {
    pub fn new(token_url: Url, credentials: Credentials) -> FormsResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            token_url,
            credentials,
            cached: Mutex::new(None),
        })
    }

    async fn refresh(&self) -> FormsResult<CachedToken> {
        debug!(url = %self.token_url, "Refreshing access token");

        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .http
            .post(self.token_url.clone())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FormsError::Auth(format!(
                "token refresh failed (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = response.json().await?;
        let lifetime = Duration::from_secs(token.expires_in);
        let expires_at = Instant::now() + lifetime.saturating_sub(EXPIRY_MARGIN);

        Ok(CachedToken {
            token: token.access_token,
            expires_at,
        })
    }
}

#[async_trait::async_trait]
impl AccessTokenProvider for OauthTokenProvider {
    async fn access_token(&self) -> FormsResult<String> {
        let mut cached = self.cached.lock().await;

        if let Some(entry) = cached.as_ref() {
            if entry.expires_at > Instant::now() {
                return Ok(entry.token.clone());
            }
        }

        let fresh = self.refresh().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }
}

/// Provider that returns a fixed, pre-issued token. Useful for tests.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> FormsResult<String> {
        Ok(self.token.clone())
    }
}
