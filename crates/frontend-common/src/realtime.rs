//! Browser transport for the notification hub

use async_trait::async_trait;
use futures::StreamExt;
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::Message;
use gloo_timers::future::TimeoutFuture;
use metroline_realtime::{
    ConnectionState, HubError, HubMessage, HubTransport, MessageSink, ReconnectDelays, StateSink,
    TokenFactory,
};
use wasm_bindgen_futures::spawn_local;

use crate::config::AppConfig;

/// WebSocket transport to the hub endpoint on the API origin.
///
/// `connect` resolves succeed/fail for the initial attempt; afterwards the
/// read loop owns the socket and drives the automatic reconnect schedule,
/// resolving a fresh token for every attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHubTransport;

fn hub_url(access_token: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    // http(s) origin -> ws(s) endpoint
    let ws_origin = origin.replacen("http", "ws", 1);
    format!(
        "{ws_origin}{}?access_token={access_token}",
        AppConfig::HUB_PATH
    )
}

#[async_trait(?Send)]
impl HubTransport for BrowserHubTransport {
    async fn connect(
        &self,
        tokens: TokenFactory,
        messages: MessageSink,
        states: StateSink,
    ) -> Result<(), HubError> {
        let token = tokens().ok_or(HubError::NoCredentials)?;
        let socket =
            WebSocket::open(&hub_url(&token)).map_err(|err| HubError::Connect(err.to_string()))?;

        spawn_local(read_loop(socket, tokens, messages, states));
        Ok(())
    }
}

async fn read_loop(
    mut socket: WebSocket,
    tokens: TokenFactory,
    messages: MessageSink,
    states: StateSink,
) {
    loop {
        while let Some(frame) = socket.next().await {
            match frame {
                Ok(Message::Text(text)) => match serde_json::from_str::<HubMessage>(&text) {
                    Ok(message) => messages(message),
                    Err(err) => tracing::warn!(error = %err, "ignoring unparseable hub frame"),
                },
                Ok(Message::Bytes(_)) => tracing::debug!("ignoring binary hub frame"),
                Err(err) => {
                    tracing::debug!(error = %err, "hub socket closed");
                    break;
                }
            }
        }

        states(ConnectionState::Reconnecting);

        let mut reopened = None;
        for delay in ReconnectDelays::new() {
            TimeoutFuture::new(delay.as_millis() as u32).await;

            // Resolve fresh on every attempt; a cleared token means the
            // session ended and the channel should die with it.
            let Some(token) = tokens() else {
                tracing::debug!("access token cleared, abandoning reconnect");
                break;
            };
            match WebSocket::open(&hub_url(&token)) {
                Ok(socket) => {
                    reopened = Some(socket);
                    break;
                }
                Err(err) => tracing::warn!(error = %err, "hub reconnect attempt failed"),
            }
        }

        match reopened {
            Some(new_socket) => {
                socket = new_socket;
                states(ConnectionState::Connected);
                tracing::info!("notification hub reconnected");
            }
            None => {
                states(ConnectionState::Disconnected);
                tracing::warn!("notification hub gave up reconnecting");
                return;
            }
        }
    }
}
