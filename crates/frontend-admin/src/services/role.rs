//! Role administration service

use metroline_frontend_common::WrappedClient;
use metroline_http::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub member_count: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    pub action: String,
    pub object: String,
}

#[derive(Clone, Default)]
pub struct RoleService;

impl RoleService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self) -> Result<Vec<Role>, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::GET, "/api/roles"))
            .await
    }

    pub async fn create(&self, request: &RoleRequest) -> Result<Role, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::POST, "/api/roles").json(request))
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api_empty(client.request(Method::DELETE, &format!("/api/roles/{id}")))
            .await
    }

    pub async fn permissions(&self, id: u64) -> Result<Vec<RolePermission>, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::GET, &format!("/api/roles/{id}/permissions")))
            .await
    }

    pub async fn grant_permission(
        &self,
        id: u64,
        permission: &RolePermission,
    ) -> Result<(), ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api_empty(
                client
                    .request(Method::POST, &format!("/api/roles/{id}/permissions"))
                    .json(permission),
            )
            .await
    }

    pub async fn revoke_permission(
        &self,
        id: u64,
        permission: &RolePermission,
    ) -> Result<(), ClientError> {
        let client = WrappedClient::new()?;
        let query = [
            ("action", permission.action.as_str()),
            ("object", permission.object.as_str()),
        ];
        client
            .execute_api_empty(
                client
                    .request(Method::DELETE, &format!("/api/roles/{id}/permissions"))
                    .query(&query),
            )
            .await
    }
}
