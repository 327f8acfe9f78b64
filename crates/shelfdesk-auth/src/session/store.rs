//! In-process session token store.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use shelfdesk_core::traits::SessionGate;

/// Upper bound on session lifetime (ten years).
pub const MAX_SESSION_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// Configured session lifetime clamped to [`MAX_SESSION_SECONDS`].
///
/// Both the server-side expiry and the cookie `Max-Age` use this value.
pub fn session_lifetime_seconds(configured: u64) -> i64 {
    configured.min(MAX_SESSION_SECONDS) as i64
}

/// Issued session tokens and their expiry times.
///
/// Tokens are random and carry no data; a token is valid while it is
/// present and unexpired. Sessions do not survive a restart.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, DateTime<Utc>>,
    max_age: Duration,
}

impl SessionStore {
    /// Create a store whose sessions live for `max_age_seconds`.
    pub fn new(max_age_seconds: u64) -> Self {
        Self {
            sessions: DashMap::new(),
            max_age: Duration::seconds(session_lifetime_seconds(max_age_seconds)),
        }
    }

    /// Issue a fresh token.
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now())
    }

    /// Issue a fresh token as of `now`.
    pub fn issue_at(&self, now: DateTime<Utc>) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(token.clone(), now + self.max_age);
        debug!(active = self.sessions.len(), "Session issued");
        token
    }

    /// Revoke a token. Unknown tokens are ignored.
    pub fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Whether `token` is live as of `now`.
    pub fn is_valid_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        self.sessions
            .get(token)
            .is_some_and(|expires_at| *expires_at > now)
    }

    /// Drop every session expired as of `now`. Returns the number removed.
    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, expires_at| *expires_at > now);
        before - self.sessions.len()
    }

    /// Number of stored sessions, expired ones included.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are stored.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionGate for SessionStore {
    async fn is_authenticated(&self, token: &str) -> bool {
        self.is_valid_at(token, Utc::now())
    }
}
