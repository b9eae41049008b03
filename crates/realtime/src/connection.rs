//! Hub connection states

/// Lifecycle of the notification hub connection.
///
/// The process starts in `Disconnected`. A lost transport goes through
/// `Reconnecting` and either returns to `Connected` or gives up back to
/// `Disconnected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting,
}

impl ConnectionState {
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}
