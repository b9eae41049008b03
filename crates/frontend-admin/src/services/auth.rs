//! Authentication API service

use metroline_frontend_common::client::api_client;
use metroline_http::types::{LoginRequest, TokenPair};
use metroline_http::ClientError;

/// Authentication API service
#[derive(Clone, Default)]
pub struct AuthApiService;

impl AuthApiService {
    pub fn new() -> Self {
        Self
    }

    /// Exchange credentials for a token pair. Uses the bare client: there is
    /// no session yet, and a 401 here is a wrong password, not an expired
    /// session.
    pub async fn login(&self, email: String, password: String) -> Result<TokenPair, ClientError> {
        let client = api_client()?;
        client.login(LoginRequest { email, password }).await
    }

    /// Best-effort server-side logout.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let client = api_client()?;
        client.logout().await
    }
}
