//! Top-level browser navigation

use metroline_core::Navigate;

/// Full top-level redirect via `location.replace`.
///
/// Replacing (rather than pushing) the history entry means the back button
/// cannot return to an authenticated view with stale state. This is a hard
/// navigation on purpose — all in-memory view state is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigate;

impl Navigate for BrowserNavigate {
    fn replace(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window, cannot navigate");
            return;
        };
        if let Err(err) = window.location().replace(path) {
            tracing::warn!(?err, path, "navigation failed");
        }
    }
}
