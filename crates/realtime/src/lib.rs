//! Metroline push-notification channel
//!
//! One persistent connection to the backend's notification hub, authenticated
//! with the current access token and carrying a single event of interest:
//! the server-initiated force logout. The transport (a browser WebSocket in
//! production) sits behind [`HubTransport`] so the connection lifecycle is
//! testable without a network.

pub mod backoff;
pub mod connection;
pub mod error;
pub mod hub;
pub mod message;
pub mod session;

pub use backoff::ReconnectDelays;
pub use connection::ConnectionState;
pub use error::HubError;
pub use hub::{HubConnection, HubTransport, MessageSink, StateSink, TokenFactory};
pub use message::HubMessage;
pub use session::{bind_forced_logout, unbind_forced_logout, FORCE_LOGOUT_EVENT};
