//! Profile service
//!
//! Profile edits also patch the stored `userInfo` cache so the header shows
//! fresh values without a re-login. The cache is allowed to drift from the
//! token claims until the next login.

use metroline_frontend_common::browser_token_store;
use metroline_frontend_common::WrappedClient;
use metroline_http::ClientError;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Default)]
pub struct ProfileService;

impl ProfileService {
    pub fn new() -> Self {
        Self
    }

    pub async fn get(&self) -> Result<Profile, ClientError> {
        let client = WrappedClient::new()?;
        client
            .execute_api(client.request(Method::GET, "/api/profile"))
            .await
    }

    pub async fn update(&self, request: &ProfileUpdateRequest) -> Result<Profile, ClientError> {
        let client = WrappedClient::new()?;
        let profile: Profile = client
            .execute_api(client.request(Method::PUT, "/api/profile").json(request))
            .await?;

        // Patch the cached claims piecemeal; the token itself is unchanged.
        let store = browser_token_store();
        let mut cached = store.cached_user_info().unwrap_or_else(|| json!({}));
        if let Some(object) = cached.as_object_mut() {
            object.insert("name".into(), json!(profile.name));
            object.insert("email".into(), json!(profile.email));
        }
        store.set_cached_user_info(&cached);

        Ok(profile)
    }
}
