//! Shared frontend plumbing for the Metroline admin SPA
//!
//! Browser bindings for the session core (storage, navigation, the
//! notification hub transport), the global API client, and the Yew
//! authentication context.

pub mod auth;
pub mod client;
pub mod client_wrapper;
pub mod components;
pub mod config;
pub mod navigate;
pub mod realtime;
pub mod session;
pub mod storage;

pub use auth::context::{
    use_auth, use_auth_session, use_is_authenticated, AuthAction, AuthContext, AuthProvider,
    AuthSession,
};
pub use client::api_client;
pub use client_wrapper::WrappedClient;
pub use components::LoadingSpinner;
pub use config::AppConfig;
pub use storage::{browser_token_store, BrowserStorage};
