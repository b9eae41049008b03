//! Staff shift scheduling service

use chrono::NaiveDate;
use metroline_frontend_common::WrappedClient;
use metroline_http::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftKind {
    Morning,
    Evening,
    Night,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Evening, ShiftKind::Night];

    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Evening => "Evening",
            ShiftKind::Night => "Night",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: u64,
    pub staff_name: String,
    pub station_code: String,
    pub date: NaiveDate,
    pub kind: ShiftKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRequest {
    pub staff_name: String,
    pub station_code: String,
    pub date: NaiveDate,
    pub kind: ShiftKind,
}

#[derive(Clone, Default)]
pub struct ShiftService;

impl ShiftService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self) -> Result<Vec<Shift>, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::GET, "/api/shifts"))
            .await
    }

    pub async fn create(&self, request: &ShiftRequest) -> Result<Shift, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::POST, "/api/shifts").json(request))
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api_empty(client.request(Method::DELETE, &format!("/api/shifts/{id}")))
            .await
    }
}
