//! The hub connection singleton

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::connection::ConnectionState;
use crate::error::HubError;
use crate::message::HubMessage;

/// Resolves the access token for a connection attempt. Called fresh on the
/// initial connect and on every reconnect attempt — never captured once —
/// so token rotation is always honored.
pub type TokenFactory = Rc<dyn Fn() -> Option<String>>;

/// Delivers inbound frames from the transport into the connection.
pub type MessageSink = Rc<dyn Fn(HubMessage)>;

/// Reports transport-driven state transitions (reconnecting, recovered,
/// given up) back to the connection.
pub type StateSink = Rc<dyn Fn(ConnectionState)>;

type EventHandler = Rc<dyn Fn(&Value)>;

/// Transport seam for the hub connection.
///
/// `connect` resolves a token via the factory, establishes the link and, on
/// success, keeps delivering frames through `messages` until the link dies.
/// The transport owns the reconnect schedule and reports progress through
/// `states`.
#[async_trait(?Send)]
pub trait HubTransport {
    async fn connect(
        &self,
        tokens: TokenFactory,
        messages: MessageSink,
        states: StateSink,
    ) -> Result<(), HubError>;
}

struct HubInner<T> {
    transport: T,
    tokens: TokenFactory,
    state: Cell<ConnectionState>,
    handlers: RefCell<HashMap<String, EventHandler>>,
}

/// A single persistent connection to the notification hub.
///
/// Process-wide singleton, shared by `Rc` on the UI thread. At most one
/// handler is registered per event name: [`HubConnection::on`] replaces, so
/// repeated setup never stacks handlers.
pub struct HubConnection<T: HubTransport> {
    inner: Rc<HubInner<T>>,
}

impl<T: HubTransport> Clone for HubConnection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: HubTransport + 'static> HubConnection<T> {
    pub fn new(transport: T, tokens: TokenFactory) -> Self {
        Self {
            inner: Rc::new(HubInner {
                transport,
                tokens,
                state: Cell::new(ConnectionState::Disconnected),
                handlers: RefCell::new(HashMap::new()),
            }),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.inner.state.get()
    }

    /// Whether the token factory currently yields a credential.
    pub fn has_credentials(&self) -> bool {
        (self.inner.tokens)().is_some()
    }

    /// Register `handler` for `event`, replacing any previous handler.
    pub fn on(&self, event: &str, handler: impl Fn(&Value) + 'static) {
        self.inner
            .handlers
            .borrow_mut()
            .insert(event.to_string(), Rc::new(handler));
    }

    /// Deregister the handler for `event`. Returns whether one was bound.
    pub fn off(&self, event: &str) -> bool {
        self.inner.handlers.borrow_mut().remove(event).is_some()
    }

    /// Route one inbound frame to its registered handler.
    pub fn dispatch(&self, message: &HubMessage) {
        // Clone the handler out before invoking it: a handler is allowed to
        // re-register or deregister handlers without re-entering the borrow.
        let handler = self.inner.handlers.borrow().get(&message.event).cloned();
        match handler {
            Some(handler) => handler(&message.data),
            None => {
                tracing::debug!(event = %message.event, "no handler for hub event");
            }
        }
    }

    /// Start the connection.
    ///
    /// Only acts when the state is exactly `Disconnected`, so concurrent or
    /// repeated starts against a live connection are no-ops. Fails without
    /// touching the transport when no token is stored. A failed attempt
    /// returns the connection to `Disconnected` for a later retry; no
    /// immediate retry is made here.
    pub async fn start(&self) -> Result<(), HubError> {
        if self.state() != ConnectionState::Disconnected {
            tracing::debug!(state = ?self.state(), "hub already active, skipping start");
            return Ok(());
        }
        if !self.has_credentials() {
            return Err(HubError::NoCredentials);
        }

        self.transition(ConnectionState::Connecting);

        let messages: MessageSink = {
            let hub = self.clone();
            Rc::new(move |message| hub.dispatch(&message))
        };
        let states: StateSink = {
            let hub = self.clone();
            Rc::new(move |state| hub.transition(state))
        };

        match self
            .inner
            .transport
            .connect(self.inner.tokens.clone(), messages, states)
            .await
        {
            Ok(()) => {
                self.transition(ConnectionState::Connected);
                tracing::info!("notification hub connected");
                Ok(())
            }
            Err(err) => {
                self.transition(ConnectionState::Disconnected);
                tracing::warn!(error = %err, "notification hub connection failed");
                Err(err)
            }
        }
    }

    fn transition(&self, next: ConnectionState) {
        let prev = self.inner.state.replace(next);
        if prev != next {
            tracing::debug!(?prev, ?next, "hub connection state changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Transport fake that records every connect attempt and the token it
    /// resolved.
    #[derive(Default)]
    struct FakeTransport {
        connects: Rc<RefCell<Vec<Option<String>>>>,
        fail_with: RefCell<Option<String>>,
    }

    impl FakeTransport {
        fn connect_count(&self) -> usize {
            self.connects.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HubTransport for FakeTransport {
        async fn connect(
            &self,
            tokens: TokenFactory,
            _messages: MessageSink,
            _states: StateSink,
        ) -> Result<(), HubError> {
            self.connects.borrow_mut().push(tokens());
            match self.fail_with.borrow_mut().take() {
                Some(reason) => Err(HubError::Connect(reason)),
                None => Ok(()),
            }
        }
    }

    fn hub_with_token() -> (HubConnection<FakeTransport>, Rc<RefCell<Vec<Option<String>>>>) {
        let transport = FakeTransport::default();
        let connects = transport.connects.clone();
        let hub = HubConnection::new(transport, Rc::new(|| Some("tok".to_string())));
        (hub, connects)
    }

    #[tokio::test]
    async fn start_without_credentials_never_touches_transport() {
        let transport = FakeTransport::default();
        let connects = transport.connects.clone();
        let hub = HubConnection::new(transport, Rc::new(|| None));

        let err = hub.start().await.unwrap_err();
        assert!(matches!(err, HubError::NoCredentials));
        assert!(connects.borrow().is_empty());
        assert_eq!(hub.state(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn start_connects_with_resolved_token() {
        let (hub, connects) = hub_with_token();
        hub.start().await.unwrap();
        assert_eq!(hub.state(), ConnectionState::Connected);
        assert_eq!(connects.borrow().as_slice(), [Some("tok".to_string())]);
    }

    #[tokio::test]
    async fn second_start_while_connected_is_a_noop() {
        let (hub, connects) = hub_with_token();
        hub.start().await.unwrap();
        hub.start().await.unwrap();
        assert_eq!(connects.borrow().len(), 1);
    }

    #[tokio::test]
    async fn failed_start_returns_to_disconnected_and_can_retry() {
        let transport = FakeTransport::default();
        *transport.fail_with.borrow_mut() = Some("handshake refused".into());
        let connects = transport.connects.clone();
        let hub = HubConnection::new(transport, Rc::new(|| Some("tok".into())));

        let err = hub.start().await.unwrap_err();
        assert!(matches!(err, HubError::Connect(_)));
        assert_eq!(hub.state(), ConnectionState::Disconnected);

        // A later invocation may succeed; the failure was not sticky.
        hub.start().await.unwrap();
        assert_eq!(connects.borrow().len(), 2);
        assert_eq!(hub.state(), ConnectionState::Connected);
    }

    #[tokio::test]
    async fn on_replaces_previous_handler() {
        let (hub, _connects) = hub_with_token();
        let calls = Rc::new(RefCell::new(Vec::new()));

        {
            let calls = calls.clone();
            hub.on("Ping", move |_| calls.borrow_mut().push("first"));
        }
        {
            let calls = calls.clone();
            hub.on("Ping", move |_| calls.borrow_mut().push("second"));
        }

        hub.dispatch(&HubMessage::new("Ping", json!({})));
        assert_eq!(calls.borrow().as_slice(), ["second"]);
    }

    #[tokio::test]
    async fn off_deregisters_handler() {
        let (hub, _connects) = hub_with_token();
        let count = Rc::new(Cell::new(0));
        {
            let count = count.clone();
            hub.on("Ping", move |_| count.set(count.get() + 1));
        }

        assert!(hub.off("Ping"));
        assert!(!hub.off("Ping"));
        hub.dispatch(&HubMessage::new("Ping", json!({})));
        assert_eq!(count.get(), 0);
    }

    #[tokio::test]
    async fn dispatching_unhandled_event_is_harmless() {
        let (hub, _connects) = hub_with_token();
        hub.dispatch(&HubMessage::new("Unknown", json!({"x": 1})));
    }

    #[tokio::test]
    async fn handler_may_deregister_itself_during_dispatch() {
        let (hub, _connects) = hub_with_token();
        {
            let hub_handle = hub.clone();
            hub.on("Once", move |_| {
                hub_handle.off("Once");
            });
        }
        hub.dispatch(&HubMessage::new("Once", json!({})));
        hub.dispatch(&HubMessage::new("Once", json!({})));
        assert!(!hub.off("Once"));
    }
}
