//! Audit log repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use shelfdesk_core::error::{AppError, ErrorKind};
use shelfdesk_core::result::AppResult;
use shelfdesk_core::types::pagination::{PageRequest, PageResponse};
use shelfdesk_entity::audit::{AuditLog, NewAuditLog};

use crate::store::{AuditFilter, AuditStore};

/// Repository for audit log entries.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditStore for AuditLogRepository {
    async fn append(&self, entry: &NewAuditLog) -> AppResult<AuditLog> {
        sqlx::query_as::<_, AuditLog>(
            "INSERT INTO audit_logs (action, resource, resource_id, \"user\", meta, ip) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(entry.action.as_str())
        .bind(entry.resource.as_str())
        .bind(&entry.resource_id)
        .bind(&entry.user)
        .bind(&entry.meta)
        .bind(&entry.ip)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create audit entry", e))
    }

    async fn search(
        &self,
        filter: AuditFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLog>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.action.is_some() {
            conditions.push(format!("action = ${param_idx}"));
            param_idx += 1;
        }
        if filter.resource.is_some() {
            conditions.push(format!("resource = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM audit_logs {where_clause}");
        let select_sql = format!(
            "SELECT * FROM audit_logs {where_clause} ORDER BY created_at DESC, id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, AuditLog>(&select_sql);

        if let Some(action) = filter.action {
            count_query = count_query.bind(action.as_str());
            select_query = select_query.bind(action.as_str());
        }
        if let Some(resource) = filter.resource {
            count_query = count_query.bind(resource.as_str());
            select_query = select_query.bind(resource.as_str());
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count audit entries", e)
        })?;

        let entries = select_query
            .bind(page.limit as i64)
            .bind(page.sql_offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search audit log", e)
            })?;

        Ok(PageResponse::new(entries, page, total as u64))
    }
}
