//! Authentication module

pub mod context;
pub mod error_handler;

pub use context::{
    use_auth, use_auth_session, use_is_authenticated, AuthAction, AuthContext, AuthProvider,
    AuthSession,
};
