//! Rider news service

use chrono::{DateTime, Utc};
use metroline_frontend_common::WrappedClient;
use metroline_http::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPostRequest {
    pub title: String,
    pub body: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublishRequest {
    is_published: bool,
}

#[derive(Clone, Default)]
pub struct NewsService;

impl NewsService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self) -> Result<Vec<NewsPost>, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::GET, "/api/news"))
            .await
    }

    pub async fn create(&self, request: &NewsPostRequest) -> Result<NewsPost, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::POST, "/api/news").json(request))
            .await
    }

    pub async fn set_published(
        &self,
        id: u64,
        is_published: bool,
    ) -> Result<NewsPost, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(
                client
                    .request(Method::PATCH, &format!("/api/news/{id}/publish"))
                    .json(&PublishRequest { is_published }),
            )
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api_empty(client.request(Method::DELETE, &format!("/api/news/{id}")))
            .await
    }
}
