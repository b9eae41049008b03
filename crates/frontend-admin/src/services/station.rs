//! Station management service

use metroline_frontend_common::WrappedClient;
use metroline_http::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub line_code: String,
    pub is_open: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRequest {
    pub code: String,
    pub name: String,
    pub line_code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StationStatusRequest {
    is_open: bool,
}

#[derive(Clone, Default)]
pub struct StationService;

impl StationService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self) -> Result<Vec<Station>, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::GET, "/api/stations"))
            .await
    }

    pub async fn create(&self, request: &StationRequest) -> Result<Station, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::POST, "/api/stations").json(request))
            .await
    }

    pub async fn update(&self, id: u64, request: &StationRequest) -> Result<Station, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(
                client
                    .request(Method::PUT, &format!("/api/stations/{id}"))
                    .json(request),
            )
            .await
    }

    /// Open or close a station for service.
    pub async fn set_open(&self, id: u64, is_open: bool) -> Result<Station, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(
                client
                    .request(Method::PATCH, &format!("/api/stations/{id}/status"))
                    .json(&StationStatusRequest { is_open }),
            )
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api_empty(client.request(Method::DELETE, &format!("/api/stations/{id}")))
            .await
    }
}
