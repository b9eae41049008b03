//! Frontend configuration

/// Application-wide constants.
pub struct AppConfig;

impl AppConfig {
    /// Path of the push-notification hub on the API origin.
    pub const HUB_PATH: &'static str = "/hubs/notifications";

    /// sessionStorage key for the one-shot notice shown on the login page
    /// after a forced logout.
    pub const SESSION_NOTICE_KEY: &'static str = "sessionNotice";

    /// Notice text stored under [`Self::SESSION_NOTICE_KEY`].
    pub const SESSION_INVALIDATED_NOTICE: &'static str =
        "Your session was signed out because the account was used elsewhere.";
}
