//! Admin login and session cookie configuration.

use serde::{Deserialize, Serialize};

/// Single-admin authentication settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Admin login name.
    #[serde(default = "default_username")]
    pub admin_username: String,
    /// Admin password in plain text. Hashed once at startup.
    #[serde(default = "default_password")]
    pub admin_password: String,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Session lifetime in seconds (cookie Max-Age and token lifetime).
    #[serde(default = "default_max_age")]
    pub session_max_age_seconds: u64,
    /// Mark the session cookie `Secure`.
    #[serde(default)]
    pub secure_cookie: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: default_username(),
            admin_password: default_password(),
            cookie_name: default_cookie_name(),
            session_max_age_seconds: default_max_age(),
            secure_cookie: false,
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin123".to_string()
}

fn default_cookie_name() -> String {
    "admin_session".to_string()
}

fn default_max_age() -> u64 {
    60 * 60 * 24 * 7
}
