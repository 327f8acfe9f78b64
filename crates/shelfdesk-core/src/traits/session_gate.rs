//! Session gate trait consulted by every protected operation.

use async_trait::async_trait;

/// Answers a single question: is this opaque token currently authenticated?
///
/// Token lifetime and issuance belong to the implementation; callers treat
/// the answer as binary and consult it once per request.
#[async_trait]
pub trait SessionGate: Send + Sync + std::fmt::Debug + 'static {
    /// Returns `true` when `token` identifies an authenticated session.
    async fn is_authenticated(&self, token: &str) -> bool;
}
