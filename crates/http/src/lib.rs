//! Metroline HTTP client
//!
//! A thin wrapper over `reqwest` that attaches the current bearer token to
//! every outgoing request and validates the backend's uniform response
//! envelope once, at this boundary. Everything else — retries, token refresh,
//! per-screen error presentation — belongs to the callers.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, TokenProvider};
pub use envelope::ApiEnvelope;
pub use error::ClientError;
