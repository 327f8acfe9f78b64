//! Product repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shelfdesk_core::error::{AppError, ErrorKind};
use shelfdesk_core::result::AppResult;
use shelfdesk_core::types::pagination::{PageRequest, PageResponse};
use shelfdesk_entity::product::{CategoryRef, NewProduct, Product, ProductListItem};

use crate::store::ProductStore;

/// A product row joined with its category name.
#[derive(Debug, FromRow)]
struct ProductWithCategoryRow {
    #[sqlx(flatten)]
    product: Product,
    category_name: Option<String>,
}

impl From<ProductWithCategoryRow> for ProductListItem {
    fn from(row: ProductWithCategoryRow) -> Self {
        let category = match (row.product.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(CategoryRef { id, name }),
            _ => None,
        };
        ProductListItem::from_product(row.product, category)
    }
}

/// Repository for product CRUD.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<ProductListItem>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count products", e))?;

        let rows = sqlx::query_as::<_, ProductWithCategoryRow>(
            "SELECT p.*, c.name AS category_name FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             ORDER BY p.seq ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))?;

        let items = rows.into_iter().map(ProductListItem::from).collect();
        Ok(PageResponse::new(items, page, total as u64))
    }

    async fn all(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load products", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))
    }

    async fn create(&self, data: &NewProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, stock, image_url, category_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(data.stock)
        .bind(&data.image_url)
        .bind(data.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))
    }

    async fn update(&self, id: Uuid, data: &NewProduct) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, price = $3, stock = $4, image_url = $5, \
             category_id = $6, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.price)
        .bind(data.stock)
        .bind(&data.image_url)
        .bind(data.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete product", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_by_category(&self, category_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count category products", e)
            })?;
        Ok(count as u64)
    }
}
