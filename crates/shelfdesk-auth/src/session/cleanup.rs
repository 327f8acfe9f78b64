//! Periodic removal of expired sessions.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::info;

use super::store::SessionStore;

/// Background task that purges expired sessions on a fixed interval.
#[derive(Debug, Clone)]
pub struct SessionCleanup {
    store: Arc<SessionStore>,
    interval: Duration,
}

impl SessionCleanup {
    /// Create a cleanup task for `store`.
    pub fn new(store: Arc<SessionStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run a single cleanup pass. Returns the number of sessions removed.
    pub fn run_once(&self) -> usize {
        let removed = self.store.purge_expired_at(Utc::now());
        if removed > 0 {
            info!(removed, remaining = self.store.len(), "Expired sessions purged");
        }
        removed
    }

    /// Spawn the cleanup loop on the current runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.run_once();
            }
        })
    }
}
