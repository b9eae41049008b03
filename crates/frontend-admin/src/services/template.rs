//! Email template service

use metroline_frontend_common::WrappedClient;
use metroline_http::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    /// Stable key the backend selects templates by, e.g. `ticket-receipt`.
    pub key: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplateRequest {
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct TemplateService;

impl TemplateService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self) -> Result<Vec<EmailTemplate>, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::GET, "/api/templates"))
            .await
    }

    pub async fn update(
        &self,
        key: &str,
        request: &EmailTemplateRequest,
    ) -> Result<EmailTemplate, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(
                client
                    .request(Method::PUT, &format!("/api/templates/{key}"))
                    .json(request),
            )
            .await
    }
}
