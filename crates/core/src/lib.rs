//! Metroline core types and session lifecycle

pub mod session;

pub use session::claims::{decode_claims, ClaimsError, TokenClaims};
pub use session::invalidation::{Navigate, SessionInvalidator, LOGIN_PATH};
pub use session::storage::{MemoryStorage, SessionStorage};
pub use session::store::{TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_INFO_KEY};
