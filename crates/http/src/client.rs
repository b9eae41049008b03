//! Metroline API client

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, ClientBuilder};
use serde::de::DeserializeOwned;

use crate::envelope::ApiEnvelope;
use crate::error::ClientError;

/// Resolves the access token to attach to an outgoing request.
///
/// Called once per request so token rotation (login, forced logout) is picked
/// up immediately — the token is never captured at client construction.
pub type TokenProvider = Arc<dyn Fn() -> Option<String> + Send + Sync>;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Metroline API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Option<TokenProvider>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token_provider", &self.tokens.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder, attaching the bearer token when one is
    /// currently stored. Requests without a token go out bare; the server's
    /// authorization rejection is the caller's to interpret.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = self.tokens.as_ref().and_then(|provider| provider()) {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Execute a request against an enveloped endpoint and unwrap the result.
    pub async fn execute_api<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let envelope: ApiEnvelope<T> = self.execute(request).await?;
        envelope.into_result()
    }

    /// Execute a request against an enveloped endpoint that answers without a
    /// result payload.
    pub async fn execute_api_empty(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        let envelope: ApiEnvelope<serde_json::Value> = self.execute(request).await?;
        envelope.into_empty()
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tokens: Option<TokenProvider>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the token provider consulted on every request
    pub fn token_provider(mut self, tokens: TokenProvider) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Override the fixed request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            // Fixed request timeout; not supported by reqwest on WASM, where
            // the browser's own fetch timeout applies.
            client_builder =
                client_builder.timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout;

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("metroline-client/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            tokens: self.tokens,
        })
    }
}
