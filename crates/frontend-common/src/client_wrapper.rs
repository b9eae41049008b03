//! Wrapped client that handles auth errors automatically

use metroline_http::{ApiClient, ClientError};
use serde::de::DeserializeOwned;

use crate::client::api_client;

/// Wrapper around the shared [`ApiClient`] that routes authentication
/// failures to the global auth error handler before surfacing them.
#[derive(Clone)]
pub struct WrappedClient {
    inner: ApiClient,
}

impl WrappedClient {
    /// Resolve the shared client.
    pub fn new() -> Result<Self, ClientError> {
        Ok(Self {
            inner: api_client()?,
        })
    }

    /// Create a request builder; the bearer token is attached when stored.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.inner.request(method, path)
    }

    /// Execute an enveloped request and handle auth errors.
    pub async fn execute_api<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        match self.inner.execute_api(request).await {
            Ok(result) => Ok(result),
            Err(error) => {
                if error.is_auth_error() {
                    crate::auth::error_handler::trigger_auth_error();
                }
                Err(error)
            }
        }
    }

    /// Execute an enveloped request that answers without a result payload.
    pub async fn execute_api_empty(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        match self.inner.execute_api_empty(request).await {
            Ok(()) => Ok(()),
            Err(error) => {
                if error.is_auth_error() {
                    crate::auth::error_handler::trigger_auth_error();
                }
                Err(error)
            }
        }
    }

    /// Get a reference to the inner client (use sparingly - prefer wrapped methods)
    pub fn inner(&self) -> &ApiClient {
        &self.inner
    }
}
