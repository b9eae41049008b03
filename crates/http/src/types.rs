//! Shared request/response types for the Metroline API
//!
//! Entity-specific DTOs live beside the services that use them; only the
//! authentication contract is shared widely enough to live here.

use serde::{Deserialize, Serialize};

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The opaque credential pair issued on successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
