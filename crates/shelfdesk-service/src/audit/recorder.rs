//! Audit recorder that never fails the caller.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use shelfdesk_core::result::AppResult;
use shelfdesk_core::types::pagination::{PageRequest, PageResponse};
use shelfdesk_database::store::{AuditFilter, AuditStore};
use shelfdesk_entity::audit::{AuditAction, AuditLog, AuditResource, NewAuditLog};

use crate::context::RequestContext;

/// Appends audit entries for catalog mutations.
///
/// [`AuditRecorder::record`] swallows store failures after logging them,
/// so a broken audit sink cannot abort the mutation being audited.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    store: Arc<dyn AuditStore>,
}

impl AuditRecorder {
    /// Create a recorder over an audit store.
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self { store }
    }

    /// Record a mutation of `resource_id` named `name`.
    pub async fn record(
        &self,
        ctx: &RequestContext,
        action: AuditAction,
        resource: AuditResource,
        resource_id: impl ToString,
        name: &str,
    ) {
        let entry = NewAuditLog::new(action, resource, resource_id.to_string())
            .by(ctx.user.clone())
            .from_ip(ctx.ip_address.clone())
            .with_meta(json!({ "name": name }));
        self.append(&entry).await;
    }

    /// Append a prepared entry, logging and discarding any failure.
    pub async fn append(&self, entry: &NewAuditLog) {
        match self.store.append(entry).await {
            Ok(log) => debug!(
                audit_id = %log.id,
                action = %entry.action,
                resource = %entry.resource,
                "Audit entry recorded"
            ),
            Err(e) => warn!(
                action = %entry.action,
                resource = %entry.resource,
                resource_id = entry.resource_id.as_deref().unwrap_or(""),
                error = %e,
                "Audit logging failed"
            ),
        }
    }

    /// Page through the audit log, newest first.
    pub async fn search(
        &self,
        filter: AuditFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLog>> {
        self.store.search(filter, page).await
    }
}
