//! Category repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use shelfdesk_core::error::{AppError, ErrorKind};
use shelfdesk_core::result::AppResult;
use shelfdesk_core::types::pagination::{PageRequest, PageResponse};
use shelfdesk_entity::category::{Category, NewCategory};

use super::map_write_error;
use crate::store::CategoryStore;

/// Repository for category CRUD.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Category>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
            })?;

        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))?;

        Ok(PageResponse::new(categories, page, total as u64))
    }

    async fn all(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load categories", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    async fn create(&self, data: &NewCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, slug, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                format!("Category '{}' already exists", data.name),
                "Failed to create category",
            )
        })
    }

    async fn update(&self, id: Uuid, data: &NewCategory) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2, slug = $3, description = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                format!("Category '{}' already exists", data.name),
                "Failed to update category",
            )
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
