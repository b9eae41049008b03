//! Hub error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    /// No access token is stored; the connection is not attempted.
    #[error("no access token available for the notification hub")]
    NoCredentials,

    /// Transport-level connect or handshake failure.
    #[error("hub connection failed: {0}")]
    Connect(String),
}
