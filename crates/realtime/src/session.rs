//! Forced-logout subscription protocol

use serde_json::Value;

use crate::connection::ConnectionState;
use crate::error::HubError;
use crate::hub::{HubConnection, HubTransport};

/// The only inbound event this system subscribes to.
pub const FORCE_LOGOUT_EVENT: &str = "ForceLogout";

/// Bind the forced-logout handler and start the connection if needed.
///
/// Invoked at application start and safe to invoke again on every UI
/// re-render:
///
/// - with no stored access token, nothing happens (no connection attempt);
/// - the previous handler is always deregistered before the new one is
///   bound, keeping exactly one active handler;
/// - the connection is only started when currently `Disconnected`.
///
/// A connection-start failure is logged by the hub and surfaced here;
/// callers treat it as non-fatal — without the channel, a forced logout is
/// simply not observed until the next page load.
pub async fn bind_forced_logout<T: HubTransport + 'static>(
    hub: &HubConnection<T>,
    handler: impl Fn(&Value) + 'static,
) -> Result<(), HubError> {
    if !hub.has_credentials() {
        tracing::debug!("no stored access token, skipping notification hub setup");
        return Ok(());
    }

    hub.off(FORCE_LOGOUT_EVENT);
    hub.on(FORCE_LOGOUT_EVENT, handler);

    if hub.state() == ConnectionState::Disconnected {
        hub.start().await?;
    }
    Ok(())
}

/// Detach the forced-logout handler.
///
/// Called when the owning view unmounts. The underlying connection is left
/// open — tearing down the handler prevents duplicate accumulation across
/// re-renders without churning the transport.
pub fn unbind_forced_logout<T: HubTransport + 'static>(hub: &HubConnection<T>) {
    hub.off(FORCE_LOGOUT_EVENT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::{MessageSink, StateSink, TokenFactory};
    use crate::message::HubMessage;
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

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

    fn hub(token: Option<&str>) -> (HubConnection<FakeTransport>, Rc<Cell<usize>>) {
        let transport = FakeTransport::default();
        let connects = transport.connects.clone();
        let token = token.map(str::to_string);
        (
            HubConnection::new(transport, Rc::new(move || token.clone())),
            connects,
        )
    }

    #[tokio::test]
    async fn without_token_no_connection_is_attempted() {
        let (hub, connects) = hub(None);
        bind_forced_logout(&hub, |_| {}).await.unwrap();
        assert_eq!(connects.get(), 0);
        assert_eq!(hub.state(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn binding_twice_keeps_one_handler_and_one_connection() {
        let (hub, connects) = hub(Some("tok"));
        let seen = Rc::new(RefCell::new(Vec::new()));

        for round in 0..2 {
            let seen = seen.clone();
            bind_forced_logout(&hub, move |_| seen.borrow_mut().push(round))
                .await
                .unwrap();
            assert_eq!(hub.state(), ConnectionState::Connected);
        }

        assert_eq!(connects.get(), 1);

        hub.dispatch(&HubMessage::new(FORCE_LOGOUT_EVENT, json!({})));
        // Only the most recent handler fires, exactly once.
        assert_eq!(seen.borrow().as_slice(), [1]);
    }

    #[tokio::test]
    async fn unbind_detaches_handler_but_keeps_connection() {
        let (hub, _connects) = hub(Some("tok"));
        let fired = Rc::new(Cell::new(false));
        {
            let fired = fired.clone();
            bind_forced_logout(&hub, move |_| fired.set(true))
                .await
                .unwrap();
        }

        unbind_forced_logout(&hub);
        hub.dispatch(&HubMessage::new(FORCE_LOGOUT_EVENT, json!({})));

        assert!(!fired.get());
        assert_eq!(hub.state(), ConnectionState::Connected);
    }
}
