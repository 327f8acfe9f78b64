//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Build a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Session status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    /// Whether the presented token passes the session gate.
    pub authenticated: bool,
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the record store does not answer.
    pub status: String,
    /// Active record store backend.
    pub backend: String,
    /// `"connected"` or `"unreachable"`.
    pub database: String,
    /// Crate version.
    pub version: String,
}
