//! Global authentication context and provider

use std::rc::Rc;

use metroline_core::TokenClaims;
use metroline_http::types::TokenPair;
use yew::prelude::*;

use crate::session;
use crate::storage::browser_token_store;

/// Snapshot of the signed-in identity, derived from the access token claims
/// at login. Profile edits update the stored `userInfo` cache, not this
/// snapshot; the two may drift until the next login.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
}

impl AuthSession {
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            id: claims.id().unwrap_or_default().to_string(),
            name: claims.name().unwrap_or_default().to_string(),
            role: claims.role().unwrap_or_default().to_string(),
            email: claims.email().unwrap_or_default().to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub session: Option<AuthSession>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Authentication context actions
pub enum AuthAction {
    /// Successful login: persist the pair and cache the decoded claims.
    Login(TokenPair),
    /// Session restored from storage on mount.
    Restore(AuthSession),
    /// Manual logout.
    Logout,
    SetLoading(bool),
    /// The backend rejected our credentials mid-session.
    MarkExpired,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            session: None,
            // Start with loading while the stored session is checked
            is_loading: true,
            error: None,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let store = browser_token_store();
        match action {
            AuthAction::Login(pair) => {
                store.set_tokens(&pair.access_token, &pair.refresh_token);

                // Seed the userInfo cache from the token claims. The cache is
                // its own read model afterwards; profile edits patch it.
                let session = match store.user_info() {
                    Some(claims) => {
                        store.set_cached_user_info(&claims.as_value());
                        Some(AuthSession::from_claims(&claims))
                    }
                    None => {
                        tracing::warn!("login token did not decode, proceeding without claims");
                        None
                    }
                };

                Rc::new(Self {
                    session,
                    is_loading: false,
                    error: None,
                })
            }
            AuthAction::Restore(session) => Rc::new(Self {
                session: Some(session),
                is_loading: false,
                error: None,
            }),
            AuthAction::Logout => {
                store.clear_session();

                Rc::new(Self {
                    session: None,
                    is_loading: false,
                    error: None,
                })
            }
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
            AuthAction::MarkExpired => {
                store.clear_session();

                Rc::new(Self {
                    session: None,
                    is_loading: false,
                    error: Some("Your session has expired. Please sign in again.".to_string()),
                })
            }
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Route authentication failures from the HTTP layer into the context
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            let auth_state = auth_state.clone();
            super::error_handler::set_auth_error_callback(Rc::new(move || {
                auth_state.dispatch(AuthAction::MarkExpired);
            }));

            // Cleanup on unmount
            move || {
                super::error_handler::clear_auth_error_callback();
            }
        });
    }

    // Restore the session from storage on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            let store = browser_token_store();
            match store.user_info() {
                Some(claims) => {
                    auth_state.dispatch(AuthAction::Restore(AuthSession::from_claims(&claims)));
                }
                None => auth_state.dispatch(AuthAction::SetLoading(false)),
            }
        });
    }

    // Keep the forced-logout listener bound whenever a session exists. The
    // hub connection itself survives re-renders; only the handler is
    // re-bound (deregister-then-register, never stacking).
    {
        let has_session = auth_state.session.is_some();
        use_effect_with(has_session, move |&has_session| {
            if has_session {
                session::spawn_forced_logout_listener();
            }
            move || {
                if has_session {
                    session::detach_forced_logout_listener();
                }
            }
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the current session
#[hook]
pub fn use_auth_session() -> Option<AuthSession> {
    let auth = use_auth();
    auth.session.clone()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.session.is_some()
}
