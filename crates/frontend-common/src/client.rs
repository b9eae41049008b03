//! Global API client instance

use std::sync::{Arc, Mutex};

use metroline_http::{ApiClient, ClientError};
use once_cell::sync::Lazy;

use crate::storage::browser_token_store;

/// Global client instance
static API_CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = web_sys::window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Get the shared API client.
///
/// Built lazily on first use. The client holds no token itself: a provider
/// reads the browser token store on every request, so login and logout are
/// picked up without rebuilding the client.
pub fn api_client() -> Result<ApiClient, ClientError> {
    let mut client_lock = API_CLIENT
        .lock()
        .expect("Failed to acquire API client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = ApiClient::builder()
        .base_url(get_base_url())
        .token_provider(Arc::new(|| browser_token_store().access_token()))
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}
