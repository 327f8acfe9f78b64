//! Per-request actor information used for audit entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfdesk_entity::audit::DEFAULT_AUDIT_USER;

/// Who is acting and from where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Acting user name.
    pub user: String,
    /// Client address, empty when unknown.
    pub ip_address: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Create a context for a known user.
    pub fn new(user: impl Into<String>, ip_address: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ip_address: ip_address.into(),
            request_time: Utc::now(),
        }
    }

    /// Context for work that is not tied to a request (CLI, tests).
    pub fn system() -> Self {
        Self::new(DEFAULT_AUDIT_USER, "")
    }
}
