//! Audit log handler.

use axum::Json;
use axum::extract::{Query, State};

use shelfdesk_core::error::AppError;
use shelfdesk_core::result::AppResult;
use shelfdesk_core::types::pagination::PageResponse;
use shelfdesk_database::store::AuditFilter;
use shelfdesk_entity::audit::{AuditAction, AuditLog, AuditResource};

use crate::dto::request::AuditQuery;
use crate::error::ApiResult;
use crate::extractors::{AdminSession, PaginationParams};
use crate::state::AppState;

fn audit_filter(query: AuditQuery) -> AppResult<AuditFilter> {
    let action = match query.action.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            AuditAction::parse(raw)
                .ok_or_else(|| AppError::validation(format!("Unknown audit action '{raw}'")))?,
        ),
        None => None,
    };
    let resource = match query.resource.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            AuditResource::parse(raw)
                .ok_or_else(|| AppError::validation(format!("Unknown audit resource '{raw}'")))?,
        ),
        None => None,
    };
    Ok(AuditFilter { action, resource })
}

/// GET /api/audit
pub async fn search_audit(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(params): Query<PaginationParams>,
    Query(query): Query<AuditQuery>,
) -> ApiResult<Json<PageResponse<AuditLog>>> {
    let page = params.into_page_request(state.default_page_size());
    let filter = audit_filter(query)?;
    Ok(Json(state.audit.search(filter, &page).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parsing() {
        let filter = audit_filter(AuditQuery {
            action: Some("delete".to_string()),
            resource: Some(String::new()),
        })
        .expect("filter");
        assert_eq!(filter.action, Some(AuditAction::Delete));
        assert_eq!(filter.resource, None);

        let bad = audit_filter(AuditQuery {
            action: None,
            resource: Some("order".to_string()),
        });
        assert!(bad.is_err());
    }
}
