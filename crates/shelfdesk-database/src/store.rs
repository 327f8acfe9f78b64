//! Store traits implemented by every record backend.

use std::fmt::Debug;

use async_trait::async_trait;
use uuid::Uuid;

use shelfdesk_core::result::AppResult;
use shelfdesk_core::types::pagination::{PageRequest, PageResponse};
use shelfdesk_entity::audit::{AuditAction, AuditLog, AuditResource, NewAuditLog};
use shelfdesk_entity::category::{Category, NewCategory};
use shelfdesk_entity::product::{NewProduct, Product, ProductListItem};

/// Product persistence.
#[async_trait]
pub trait ProductStore: Send + Sync + Debug + 'static {
    /// One page of products in store order (insertion order), each with its
    /// category expanded to a name-only projection.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<ProductListItem>>;

    /// Every product, unpaginated. Used for notifications and reports.
    async fn all(&self) -> AppResult<Vec<Product>>;

    /// Find a product by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Insert a product.
    async fn create(&self, data: &NewProduct) -> AppResult<Product>;

    /// Replace a product's fields. Returns `None` when the product is missing.
    async fn update(&self, id: Uuid, data: &NewProduct) -> AppResult<Option<Product>>;

    /// Delete a product. Returns `false` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Number of products referencing a category.
    async fn count_by_category(&self, category_id: Uuid) -> AppResult<u64>;
}

/// Category persistence.
#[async_trait]
pub trait CategoryStore: Send + Sync + Debug + 'static {
    /// One page of categories ordered by name ascending.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Category>>;

    /// Every category ordered by name ascending.
    async fn all(&self) -> AppResult<Vec<Category>>;

    /// Find a category by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// Insert a category. Duplicate names or slugs are a conflict.
    async fn create(&self, data: &NewCategory) -> AppResult<Category>;

    /// Replace a category's fields. Returns `None` when the category is missing.
    async fn update(&self, id: Uuid, data: &NewCategory) -> AppResult<Option<Category>>;

    /// Delete a category. Returns `false` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Filters for audit log queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditFilter {
    /// Only entries with this action.
    pub action: Option<AuditAction>,
    /// Only entries for this resource kind.
    pub resource: Option<AuditResource>,
}

impl AuditFilter {
    /// Whether an entry passes the filter.
    pub fn matches(&self, entry: &AuditLog) -> bool {
        self.action.is_none_or(|a| entry.action == a.as_str())
            && self.resource.is_none_or(|r| entry.resource == r.as_str())
    }
}

/// Append-only audit log persistence.
#[async_trait]
pub trait AuditStore: Send + Sync + Debug + 'static {
    /// Append an entry.
    async fn append(&self, entry: &NewAuditLog) -> AppResult<AuditLog>;

    /// One page of entries, newest first.
    async fn search(&self, filter: AuditFilter, page: &PageRequest)
    -> AppResult<PageResponse<AuditLog>>;
}
