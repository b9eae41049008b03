//! Authentication client methods

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{LoginRequest, TokenPair};

impl ApiClient {
    /// Exchange credentials for a token pair.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenPair, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/login")
            .json(&request);
        self.execute_api(request).await
    }

    /// Tell the backend to discard the current session. Best-effort: callers
    /// clear local state regardless of the outcome.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/api/auth/logout");
        self.execute_api_empty(request).await
    }
}
