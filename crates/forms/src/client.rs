//! Main client for the Google Forms API.

use crate::auth::{AccessTokenProvider, OauthTokenProvider};
use crate::config::{ClientConfig, Credentials};
use crate::error::{FormsError, FormsResult};
use crate::service::FormsService;
use crate::transport::HttpTransport;
use crate::types::{BatchUpdateRequest, BatchUpdateResponse, Form, NewForm, UpdateRequest};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Google Forms v1 API.
#[derive(Clone)]
pub struct FormsClient {
    http: HttpTransport,
}

impl FormsClient {
    /// Create a new client builder.
    pub fn builder() -> FormsClientBuilder {
        FormsClientBuilder::new()
    }
}

#[async_trait::async_trait]
impl FormsService for FormsClient {
    async fn create_form(&self, form: NewForm) -> FormsResult<Form> {
        self.http.post("/v1/forms", &form).await
    }

    async fn batch_update(
        &self,
        form_id: &str,
        requests: Vec<UpdateRequest>,
    ) -> FormsResult<BatchUpdateResponse> {
        let body = BatchUpdateRequest { requests };
        self.http
            .post(&format!("/v1/forms/{}:batchUpdate", form_id), &body)
            .await
    }

    async fn get_form(&self, form_id: &str) -> FormsResult<serde_json::Value> {
        self.http.get(&format!("/v1/forms/{}", form_id)).await
    }

    async fn list_responses(&self, form_id: &str) -> FormsResult<serde_json::Value> {
        self.http
            .get(&format!("/v1/forms/{}/responses", form_id))
            .await
    }
}

/// Builder for [`FormsClient`].
pub struct FormsClientBuilder {
    config: ClientConfig,
    credentials: Option<Credentials>,
    token_provider: Option<Arc<dyn AccessTokenProvider>>,
}

impl FormsClientBuilder {
    fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            credentials: None,
            token_provider: None,
        }
    }

    /// Override the Forms API base URL.
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> FormsResult<Self> {
        self.config.base_url = Url::parse(base_url.as_ref())?;
        Ok(self)
    }

    /// Override the OAuth token endpoint.
    pub fn token_url(mut self, token_url: impl AsRef<str>) -> FormsResult<Self> {
        self.config.token_url = Url::parse(token_url.as_ref())?;
        Ok(self)
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the OAuth credentials used to mint access tokens.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Supply a custom token provider instead of the OAuth exchange.
    pub fn token_provider(mut self, provider: Arc<dyn AccessTokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Build the client.
    pub fn build(self) -> FormsResult<FormsClient> {
        let tokens: Arc<dyn AccessTokenProvider> = match self.token_provider {
            Some(provider) => provider,
            None => {
                let credentials = self.credentials.ok_or_else(|| {
                    FormsError::Config("credentials are required".to_string())
                })?;
                Arc::new(OauthTokenProvider::new(
                    self.config.token_url.clone(),
                    credentials,
                )?)
            }
        };

        let http = HttpTransport::new(Arc::new(self.config), tokens)?;
        Ok(FormsClient { http })
    }
}
