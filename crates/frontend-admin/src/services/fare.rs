//! Fare product service
//!
//! Fare products are CRUD data; pricing rules live server-side.

use metroline_frontend_common::WrappedClient;
use metroline_http::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareProduct {
    pub id: u64,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price_cents: u64,
    pub valid_days: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareProductRequest {
    pub name: String,
    pub price_cents: u64,
    pub valid_days: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FarePriceRequest {
    price_cents: u64,
}

#[derive(Clone, Default)]
pub struct FareService;

impl FareService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self) -> Result<Vec<FareProduct>, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::GET, "/api/fares"))
            .await
    }

    pub async fn create(&self, request: &FareProductRequest) -> Result<FareProduct, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::POST, "/api/fares").json(request))
            .await
    }

    pub async fn set_price(&self, id: u64, price_cents: u64) -> Result<FareProduct, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(
                client
                    .request(Method::PATCH, &format!("/api/fares/{id}/price"))
                    .json(&FarePriceRequest { price_cents }),
            )
            .await
    }

    /// Retire a product; sold tickets stay valid, so products are never
    /// deleted outright.
    pub async fn retire(&self, id: u64) -> Result<FareProduct, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::POST, &format!("/api/fares/{id}/retire")))
            .await
    }
}
