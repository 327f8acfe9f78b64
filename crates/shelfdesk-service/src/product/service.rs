//! Product CRUD operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use shelfdesk_core::error::AppError;
use shelfdesk_core::result::AppResult;
use shelfdesk_core::types::pagination::{PageRequest, PageResponse};
use shelfdesk_database::store::ProductStore;
use shelfdesk_entity::audit::{AuditAction, AuditResource};
use shelfdesk_entity::product::{Product, ProductListItem};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;
use crate::validation::{ProductPayload, validate_product};

use super::table::TableView;

/// Manages product CRUD operations.
#[derive(Debug, Clone)]
pub struct ProductService {
    /// Product store.
    products: Arc<dyn ProductStore>,
    /// Audit recorder.
    audit: AuditRecorder,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(products: Arc<dyn ProductStore>, audit: AuditRecorder) -> Self {
        Self { products, audit }
    }

    /// Lists one page of products with category names.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<ProductListItem>> {
        self.products.list(page).await
    }

    /// Lists one page, then applies the table view to that page only.
    pub async fn list_view(
        &self,
        page: &PageRequest,
        view: &TableView,
    ) -> AppResult<PageResponse<ProductListItem>> {
        let mut result = self.products.list(page).await?;
        if !view.is_identity() {
            result.data = view.apply(result.data);
        }
        Ok(result)
    }

    /// Gets a product by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Validates and creates a product.
    pub async fn create(&self, ctx: &RequestContext, payload: ProductPayload) -> AppResult<Product> {
        let data = validate_product(payload)?;
        let product = self.products.create(&data).await?;

        info!(product_id = %product.id, name = %product.name, "Product created");
        self.audit
            .record(ctx, AuditAction::Create, AuditResource::Product, product.id, &product.name)
            .await;

        Ok(product)
    }

    /// Validates and replaces a product.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        payload: ProductPayload,
    ) -> AppResult<Product> {
        let data = validate_product(payload)?;
        let product = self
            .products
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        info!(product_id = %product.id, "Product updated");
        self.audit
            .record(ctx, AuditAction::Update, AuditResource::Product, product.id, &product.name)
            .await;

        Ok(product)
    }

    /// Deletes a product.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let product = self.get(id).await?;
        if !self.products.delete(id).await? {
            return Err(AppError::not_found("Product not found"));
        }

        info!(product_id = %id, "Product deleted");
        self.audit
            .record(ctx, AuditAction::Delete, AuditResource::Product, id, &product.name)
            .await;

        Ok(())
    }
}
