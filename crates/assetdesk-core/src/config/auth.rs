//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    #[serde(default = "default_session_secret")]
    pub session_secret: String,
    /// Session lifetime in days.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_days: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Minimum password length for new accounts.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

fn default_session_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_session_ttl() -> u64 {
    7
}

fn default_cookie_name() -> String {
    "assetdesk_session".to_string()
}

fn default_password_min() -> usize {
    8
}
