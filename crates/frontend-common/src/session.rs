//! Forced-logout wiring
//!
//! Owns the process-wide hub connection and binds the invalidation handler
//! to it. The connection lives for the whole page; view re-renders only
//! re-bind the handler.

use std::rc::Rc;

use metroline_core::SessionInvalidator;
use metroline_realtime::{bind_forced_logout, unbind_forced_logout, HubConnection};
use wasm_bindgen_futures::spawn_local;

use crate::config::AppConfig;
use crate::navigate::BrowserNavigate;
use crate::realtime::BrowserHubTransport;
use crate::storage::browser_token_store;

thread_local! {
    /// The one hub connection for this page.
    static SESSION_HUB: HubConnection<BrowserHubTransport> = HubConnection::new(
        BrowserHubTransport,
        Rc::new(|| browser_token_store().access_token()),
    );
}

/// Run `f` against the session hub singleton.
pub fn with_session_hub<R>(f: impl FnOnce(&HubConnection<BrowserHubTransport>) -> R) -> R {
    SESSION_HUB.with(f)
}

/// Bind the forced-logout handler and start the hub if it is down.
///
/// Safe to call on every re-render: with no stored token nothing happens,
/// a live connection is reused, and the handler never stacks.
pub fn spawn_forced_logout_listener() {
    spawn_local(async {
        let hub = SESSION_HUB.with(Clone::clone);
        let invalidator = SessionInvalidator::new(browser_token_store(), BrowserNavigate);

        let result = bind_forced_logout(&hub, move |data| {
            // Leave a one-shot notice for the login page, then hard-redirect.
            set_session_notice(AppConfig::SESSION_INVALIDATED_NOTICE);
            invalidator.handle_forced_logout(data);
        })
        .await;

        if let Err(err) = result {
            // Non-fatal: without the channel, a forced logout elsewhere is
            // observed on the next page load instead.
            tracing::warn!(error = %err, "session listener not started");
        }
    });
}

/// Detach the forced-logout handler; the connection stays up.
pub fn detach_forced_logout_listener() {
    SESSION_HUB.with(|hub| unbind_forced_logout(hub));
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

fn set_session_notice(notice: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(AppConfig::SESSION_NOTICE_KEY, notice);
    }
}

/// Read and clear the one-shot notice left behind by a forced logout.
pub fn take_session_notice() -> Option<String> {
    let storage = session_storage()?;
    let notice = storage.get_item(AppConfig::SESSION_NOTICE_KEY).ok().flatten();
    if notice.is_some() {
        let _ = storage.remove_item(AppConfig::SESSION_NOTICE_KEY);
    }
    notice
}
