//! End-to-end forced-logout scenario: a hub dispatch clears the stored
//! session and redirects to the login entry point.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use metroline_core::{MemoryStorage, Navigate, SessionInvalidator, SessionStorage, TokenStore};
use metroline_realtime::{
    bind_forced_logout, HubConnection, HubError, HubMessage, HubTransport, MessageSink, StateSink,
    TokenFactory, FORCE_LOGOUT_EVENT,
};
use serde_json::json;

#[derive(Default)]
struct FakeTransport {
    connects: Rc<Cell<usize>>,
}

#[async_trait(?Send)]
impl HubTransport for FakeTransport {
    async fn connect(
        &self,
        _tokens: TokenFactory,
        _messages: MessageSink,
        _states: StateSink,
    ) -> Result<(), HubError> {
        self.connects.set(self.connects.get() + 1);
        Ok(())
    }
}

#[derive(Default, Clone)]
struct RecordingNavigator {
    targets: Rc<RefCell<Vec<String>>>,
}

impl Navigate for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.targets.borrow_mut().push(path.to_string());
    }
}

#[tokio::test]
async fn force_logout_event_clears_storage_and_redirects() {
    let storage = Rc::new(MemoryStorage::new());
    let store = TokenStore::new(storage.clone());
    store.set_tokens("header.payload.sig", "refresh-1");
    store.set_cached_user_info(&json!({"id": "42", "role": "ADMIN"}));

    let transport = FakeTransport::default();
    let hub = {
        let store = store.clone();
        HubConnection::new(transport, Rc::new(move || store.access_token()))
    };

    let navigator = RecordingNavigator::default();
    let invalidator = SessionInvalidator::new(store, navigator.clone());
    bind_forced_logout(&hub, move |data| invalidator.handle_forced_logout(data))
        .await
        .unwrap();

    hub.dispatch(&HubMessage::new(
        FORCE_LOGOUT_EVENT,
        json!({"reason": "session opened elsewhere"}),
    ));

    assert!(storage.get("accessToken").is_none());
    assert!(storage.get("refreshToken").is_none());
    assert!(storage.get("userInfo").is_none());
    assert_eq!(navigator.targets.borrow().as_slice(), ["/login"]);
}

#[tokio::test]
async fn duplicate_delivery_after_logout_is_tolerated() {
    let storage = Rc::new(MemoryStorage::new());
    let store = TokenStore::new(storage.clone());
    store.set_tokens("acc", "ref");

    let hub = {
        let store = store.clone();
        HubConnection::new(FakeTransport::default(), Rc::new(move || store.access_token()))
    };

    let navigator = RecordingNavigator::default();
    let invalidator = SessionInvalidator::new(store, navigator.clone());
    bind_forced_logout(&hub, move |data| invalidator.handle_forced_logout(data))
        .await
        .unwrap();

    // The reconnect policy may deliver the event again after the session is
    // already gone; the handler still fires and must stay harmless.
    let msg = HubMessage::new(FORCE_LOGOUT_EVENT, json!({}));
    hub.dispatch(&msg);
    hub.dispatch(&msg);

    assert!(storage.get("accessToken").is_none());
    assert_eq!(navigator.targets.borrow().len(), 2);
    assert!(navigator.targets.borrow().iter().all(|t| t == "/login"));
}
