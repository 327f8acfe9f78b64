//! Admin login and logout.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use shelfdesk_core::config::AuthConfig;
use shelfdesk_core::error::AppError;
use shelfdesk_core::result::AppResult;
use shelfdesk_core::traits::SessionGate;

use crate::password::PasswordHasher;
use crate::session::SessionStore;

/// Checks the single administrator's credentials and manages their sessions.
///
/// The configured password is hashed once at construction and the
/// plaintext is not retained.
#[derive(Debug, Clone)]
pub struct Authenticator {
    username: String,
    password_hash: String,
    hasher: PasswordHasher,
    sessions: Arc<SessionStore>,
}

impl Authenticator {
    /// Build an authenticator from configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash_password(&config.admin_password)?;
        Ok(Self {
            username: config.admin_username.clone(),
            password_hash,
            hasher,
            sessions: Arc::new(SessionStore::new(config.session_max_age_seconds)),
        })
    }

    /// The configured admin username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Shared session store.
    pub fn sessions(&self) -> Arc<SessionStore> {
        Arc::clone(&self.sessions)
    }

    /// Verify credentials and issue a session token.
    pub fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let password_ok = self.hasher.verify_password(password, &self.password_hash)?;
        if username != self.username || !password_ok {
            warn!(username, "Rejected login attempt");
            return Err(AppError::authentication("Invalid username or password"));
        }

        let token = self.sessions.issue();
        info!(username, "Admin logged in");
        Ok(token)
    }

    /// Revoke a session token.
    pub fn logout(&self, token: &str) {
        self.sessions.revoke(token);
        info!("Admin logged out");
    }
}

#[async_trait]
impl SessionGate for Authenticator {
    async fn is_authenticated(&self, token: &str) -> bool {
        self.sessions.is_authenticated(token).await
    }
}
