//! Token store: the single authority for the session credential pair

use serde_json::Value;

use super::claims::{decode_claims, TokenClaims};
use super::storage::SessionStorage;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Storage key for the cached identity claims.
pub const USER_INFO_KEY: &str = "userInfo";

/// Reads and writes the credential pair and the cached identity claims.
///
/// All session state flows through this type; nothing else touches the
/// storage keys directly. Writes are last-write-wins — there is no locking
/// across concurrent flows (single-tab assumption).
#[derive(Debug, Clone)]
pub struct TokenStore<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Overwrite both stored tokens. No shape validation is performed.
    pub fn set_tokens(&self, access: &str, refresh: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, access);
        self.storage.set(REFRESH_TOKEN_KEY, refresh);
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)
    }

    /// Delete both tokens. Idempotent.
    pub fn remove_tokens(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }

    /// Claims decoded from the current access token.
    ///
    /// `None` when no token is stored or the payload does not decode; decode
    /// failures are logged, never propagated.
    pub fn user_info(&self) -> Option<TokenClaims> {
        let token = self.access_token()?;
        match decode_claims(&token) {
            Ok(claims) => Some(claims),
            Err(err) => {
                tracing::warn!(error = %err, "failed to decode access token claims");
                None
            }
        }
    }

    /// The `userInfo` cache. Independent of the token claims: written at
    /// login, patched by profile edits, and allowed to drift.
    pub fn cached_user_info(&self) -> Option<Value> {
        let raw = self.storage.get(USER_INFO_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(error = %err, "stored userInfo is not valid JSON");
                None
            }
        }
    }

    pub fn set_cached_user_info(&self, info: &Value) {
        match serde_json::to_string(info) {
            Ok(raw) => self.storage.set(USER_INFO_KEY, &raw),
            Err(err) => tracing::warn!(error = %err, "could not serialize userInfo"),
        }
    }

    pub fn remove_cached_user_info(&self) {
        self.storage.remove(USER_INFO_KEY);
    }

    /// Erase the credential pair and the cached claims. Idempotent.
    pub fn clear_session(&self) {
        self.remove_tokens();
        self.remove_cached_user_info();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStorage;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::json;

    fn store() -> TokenStore<MemoryStorage> {
        TokenStore::new(MemoryStorage::new())
    }

    #[test]
    fn set_tokens_then_read_back() {
        let store = store();
        store.set_tokens("acc-1", "ref-1");
        assert_eq!(store.access_token().as_deref(), Some("acc-1"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref-1"));
    }

    #[test]
    fn set_tokens_overwrites_unconditionally() {
        let store = store();
        store.set_tokens("acc-1", "ref-1");
        store.set_tokens("acc-2", "ref-2");
        assert_eq!(store.access_token().as_deref(), Some("acc-2"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref-2"));
    }

    #[test]
    fn remove_tokens_is_idempotent() {
        let store = store();
        store.set_tokens("acc", "ref");
        store.remove_tokens();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
        // Second removal must be a quiet no-op.
        store.remove_tokens();
        assert!(store.access_token().is_none());
    }

    #[test]
    fn user_info_decodes_stored_token() {
        let store = store();
        let payload = json!({"role": "ADMIN", "id": "42"});
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());
        store.set_tokens(&format!("header.{body}.sig"), "refresh");

        let claims = store.user_info().expect("claims should decode");
        assert_eq!(claims.role(), Some("ADMIN"));
        assert_eq!(claims.id(), Some("42"));
        assert_eq!(claims.as_value(), payload);
    }

    #[test]
    fn user_info_is_none_without_token() {
        assert!(store().user_info().is_none());
    }

    #[test]
    fn user_info_is_none_for_malformed_token() {
        let store = store();
        store.set_tokens("not-a-token", "refresh");
        assert!(store.user_info().is_none());
    }

    #[test]
    fn cached_user_info_is_independent_of_token() {
        let store = store();
        store.set_cached_user_info(&json!({"name": "Edited Name"}));
        // No token stored, cache still readable.
        assert!(store.access_token().is_none());
        assert_eq!(
            store.cached_user_info(),
            Some(json!({"name": "Edited Name"}))
        );
    }

    #[test]
    fn clear_session_removes_everything() {
        let store = store();
        store.set_tokens("acc", "ref");
        store.set_cached_user_info(&json!({"id": "1"}));
        store.clear_session();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.cached_user_info().is_none());
        assert!(store.storage().is_empty());
    }
}
