//! In-memory implementation of every store trait.
//!
//! Collections are plain vectors behind async read-write locks, so
//! products keep insertion order exactly as the PostgreSQL backend does.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use shelfdesk_core::error::AppError;
use shelfdesk_core::result::AppResult;
use shelfdesk_core::types::pagination::{PageRequest, PageResponse};
use shelfdesk_entity::audit::{AuditLog, NewAuditLog};
use shelfdesk_entity::category::{Category, NewCategory};
use shelfdesk_entity::product::{CategoryRef, NewProduct, Product, ProductListItem};

use crate::store::{AuditFilter, AuditStore, CategoryStore, ProductStore};

/// Process-local store for products, categories and audit entries.
///
/// Cloning shares the underlying collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: Arc<RwLock<Vec<Product>>>,
    categories: Arc<RwLock<Vec<Category>>>,
    audit: Arc<RwLock<Vec<AuditLog>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories sorted by name, ties broken by id.
    async fn sorted_categories(&self) -> Vec<Category> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        categories
    }

    /// Reject a name or slug already used by another category.
    fn check_unique(categories: &[Category], data: &NewCategory, except: Option<Uuid>) -> AppResult<()> {
        let clash = categories.iter().filter(|c| Some(c.id) != except).any(|c| {
            c.name == data.name || (data.slug.is_some() && c.slug == data.slug)
        });
        if clash {
            return Err(AppError::conflict(format!(
                "Category '{}' already exists",
                data.name
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<ProductListItem>> {
        let products = self.products.read().await;
        let categories = self.categories.read().await;

        let window = page.slice(products.iter().cloned().collect());
        let items = window
            .into_iter()
            .map(|product| {
                let category = product.category_id.and_then(|id| {
                    categories.iter().find(|c| c.id == id).map(|c| CategoryRef {
                        id: c.id,
                        name: c.name.clone(),
                    })
                });
                ProductListItem::from_product(product, category)
            })
            .collect();

        Ok(PageResponse::new(items, page, products.len() as u64))
    }

    async fn all(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.products.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, data: &NewProduct) -> AppResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            price: data.price,
            stock: data.stock,
            image_url: data.image_url.clone(),
            category_id: data.category_id,
            created_at: now,
            updated_at: now,
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, data: &NewProduct) -> AppResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.name = data.name.clone();
        product.price = data.price;
        product.stock = data.stock;
        product.image_url = data.image_url.clone();
        product.category_id = data.category_id;
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    async fn count_by_category(&self, category_id: Uuid) -> AppResult<u64> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.category_id == Some(category_id))
            .count() as u64)
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Category>> {
        Ok(PageResponse::from_ordered(self.sorted_categories().await, page))
    }

    async fn all(&self) -> AppResult<Vec<Category>> {
        Ok(self.sorted_categories().await)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self.categories.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, data: &NewCategory) -> AppResult<Category> {
        let mut categories = self.categories.write().await;
        Self::check_unique(&categories, data, None)?;

        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            slug: data.slug.clone(),
            description: data.description.clone(),
            created_at: now,
            updated_at: now,
        };
        categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: Uuid, data: &NewCategory) -> AppResult<Option<Category>> {
        let mut categories = self.categories.write().await;
        if !categories.iter().any(|c| c.id == id) {
            return Ok(None);
        }
        Self::check_unique(&categories, data, Some(id))?;

        let Some(category) = categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        category.name = data.name.clone();
        category.slug = data.slug.clone();
        category.description = data.description.clone();
        category.updated_at = Utc::now();
        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() < before)
    }
}

#[async_trait]
impl AuditStore for MemoryStore {
    async fn append(&self, entry: &NewAuditLog) -> AppResult<AuditLog> {
        let log = AuditLog {
            id: Uuid::new_v4(),
            action: entry.action.as_str().to_string(),
            resource: entry.resource.as_str().to_string(),
            resource_id: entry.resource_id.clone(),
            user: entry.user.clone(),
            meta: entry.meta.clone(),
            ip: entry.ip.clone(),
            created_at: Utc::now(),
        };
        self.audit.write().await.push(log.clone());
        Ok(log)
    }

    async fn search(
        &self,
        filter: AuditFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditLog>> {
        // Appends are chronological, so reversing yields newest first.
        let entries: Vec<AuditLog> = self
            .audit
            .read()
            .await
            .iter()
            .rev()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        Ok(PageResponse::from_ordered(entries, page))
    }
}
