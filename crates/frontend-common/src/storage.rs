//! Browser-backed session storage

use gloo::storage::{LocalStorage, Storage};
use metroline_core::{SessionStorage, TokenStore};

/// `localStorage`-backed implementation of the session storage seam.
///
/// Tokens must survive page reloads, so the durable store is used rather
/// than per-tab sessionStorage. Values are stored verbatim (the tokens are
/// opaque strings, `userInfo` is already JSON). Failures (storage disabled,
/// quota) degrade to "no value" rather than erroring.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!(key, ?err, "failed to write localStorage");
        }
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}

/// The token store every frontend flow goes through.
pub fn browser_token_store() -> TokenStore<BrowserStorage> {
    TokenStore::new(BrowserStorage)
}
