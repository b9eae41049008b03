//! Forced session invalidation
//!
//! The server pushes a force-logout signal when the session is invalidated
//! elsewhere (typically a newer login for the same account). Handling it is
//! a deterministic cleanup-and-redirect, not an error path.

use serde_json::Value;

use super::storage::SessionStorage;
use super::store::TokenStore;

/// Top-level navigation target after invalidation.
pub const LOGIN_PATH: &str = "/login";

/// Client-side navigation seam.
///
/// The browser implementation performs a full top-level redirect (replacing
/// the current history entry) so stale authenticated view state cannot be
/// reached through the back button.
pub trait Navigate {
    /// Replace the current location with `path`. Navigating to the current
    /// location must be a no-op, not an error.
    fn replace(&self, path: &str);
}

/// Reacts to the forced-logout signal: erase the credential pair and the
/// cached claims, then redirect to the login entry point.
pub struct SessionInvalidator<S: SessionStorage, N: Navigate> {
    store: TokenStore<S>,
    navigator: N,
}

impl<S: SessionStorage, N: Navigate> SessionInvalidator<S, N> {
    pub fn new(store: TokenStore<S>, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Handle one forced-logout delivery.
    ///
    /// Safe under rapid duplicate delivery: clearing cleared storage and
    /// re-issuing the redirect are both no-ops.
    pub fn handle_forced_logout(&self, payload: &Value) {
        tracing::info!(%payload, "session invalidated by server, logging out");
        self.store.clear_session();
        self.navigator.replace(LOGIN_PATH);
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStorage;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct RecordingNavigator {
        targets: Rc<RefCell<Vec<String>>>,
    }

    impl Navigate for RecordingNavigator {
        fn replace(&self, path: &str) {
            self.targets.borrow_mut().push(path.to_string());
        }
    }

    fn invalidator() -> (
        SessionInvalidator<Rc<MemoryStorage>, RecordingNavigator>,
        Rc<MemoryStorage>,
        RecordingNavigator,
    ) {
        let storage = Rc::new(MemoryStorage::new());
        let navigator = RecordingNavigator::default();
        let invalidator =
            SessionInvalidator::new(TokenStore::new(storage.clone()), navigator.clone());
        (invalidator, storage, navigator)
    }

    #[test]
    fn clears_session_and_redirects_to_login() {
        let (invalidator, storage, navigator) = invalidator();
        invalidator.store().set_tokens("acc", "ref");
        invalidator
            .store()
            .set_cached_user_info(&json!({"id": "9"}));

        invalidator.handle_forced_logout(&json!({"reason": "newer session"}));

        assert!(storage.is_empty());
        assert_eq!(navigator.targets.borrow().as_slice(), ["/login"]);
    }

    #[test]
    fn duplicate_delivery_is_idempotent() {
        let (invalidator, storage, navigator) = invalidator();
        invalidator.store().set_tokens("acc", "ref");

        invalidator.handle_forced_logout(&json!({}));
        invalidator.handle_forced_logout(&json!({}));

        assert!(storage.is_empty());
        // Both deliveries redirect to the same place; the second is harmless.
        assert_eq!(navigator.targets.borrow().as_slice(), ["/login", "/login"]);
    }

    #[test]
    fn handles_delivery_with_no_session_present() {
        let (invalidator, storage, navigator) = invalidator();
        invalidator.handle_forced_logout(&json!(null));
        assert!(storage.is_empty());
        assert_eq!(navigator.targets.borrow().as_slice(), ["/login"]);
    }
}
