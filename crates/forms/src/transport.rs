//! HTTP transport layer for the Forms client.

use crate::auth::AccessTokenProvider;
use crate::config::ClientConfig;
use crate::error::{FormsError, FormsResult};
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making Forms API requests.
///
/// Each request is sent exactly once: failures are surfaced to the caller
/// without retrying, and the only bound on a slow upstream is the client
/// timeout from the configuration.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(
        config: Arc<ClientConfig>,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> FormsResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> FormsResult<url::Url> {
        self.config
            .base_url
            .join(path)
            .map_err(FormsError::InvalidUrl)
    }

    /// Attach a bearer token and execute a request.
    async fn execute(&self, request_builder: RequestBuilder) -> FormsResult<Response> {
        let token = self.tokens.access_token().await?;
        let response = request_builder.bearer_auth(token).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(FormsError::from_response(status.as_u16(), &body))
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> FormsResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.execute(self.client.get(url)).await?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Execute a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> FormsResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self.execute(self.client.post(url).json(body)).await?;
        let body = response.json().await?;
        Ok(body)
    }
}
