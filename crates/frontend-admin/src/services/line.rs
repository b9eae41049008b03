//! Line management service

use metroline_frontend_common::WrappedClient;
use metroline_http::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: u64,
    pub code: String,
    pub name: String,
    /// Display color, `#rrggbb`.
    pub color: String,
    pub first_terminus: String,
    pub last_terminus: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub code: String,
    pub name: String,
    pub color: String,
    pub first_terminus: String,
    pub last_terminus: String,
}

#[derive(Clone, Default)]
pub struct LineService;

impl LineService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self) -> Result<Vec<Line>, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::GET, "/api/lines"))
            .await
    }

    pub async fn create(&self, request: &LineRequest) -> Result<Line, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::POST, "/api/lines").json(request))
            .await
    }

    pub async fn update(&self, id: u64, request: &LineRequest) -> Result<Line, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(
                client
                    .request(Method::PUT, &format!("/api/lines/{id}"))
                    .json(request),
            )
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api_empty(client.request(Method::DELETE, &format!("/api/lines/{id}")))
            .await
    }
}
