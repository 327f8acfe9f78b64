//! Store selection by configured provider.

use std::sync::Arc;

use tracing::info;

use shelfdesk_core::config::{DatabaseConfig, StoreProvider};
use shelfdesk_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::repositories::{AuditLogRepository, CategoryRepository, ProductRepository};
use crate::store::{AuditStore, CategoryStore, ProductStore};

/// The set of stores the service layer works against.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Product store.
    pub products: Arc<dyn ProductStore>,
    /// Category store.
    pub categories: Arc<dyn CategoryStore>,
    /// Audit log store.
    pub audit: Arc<dyn AuditStore>,
    /// Shared pool when the PostgreSQL provider is active.
    pub database: Option<DatabasePool>,
}

impl Stores {
    /// Build stores for the configured provider.
    ///
    /// The PostgreSQL provider reuses the process-wide pool.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL record store");
                let database = DatabasePool::shared(config).await?.clone();
                let pool = database.pool().clone();
                Ok(Self {
                    products: Arc::new(ProductRepository::new(pool.clone())),
                    categories: Arc::new(CategoryRepository::new(pool.clone())),
                    audit: Arc::new(AuditLogRepository::new(pool)),
                    database: Some(database),
                })
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory record store");
                Ok(Self::memory())
            }
        }
    }

    /// Stores backed by one fresh [`MemoryStore`].
    pub fn memory() -> Self {
        Self::from_memory(MemoryStore::new())
    }

    /// Stores sharing an existing [`MemoryStore`].
    pub fn from_memory(store: MemoryStore) -> Self {
        Self {
            products: Arc::new(store.clone()),
            categories: Arc::new(store.clone()),
            audit: Arc::new(store),
            database: None,
        }
    }

    /// Check that the backing store answers. The in-memory store always does.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.database {
            Some(database) => database.health_check().await,
            None => Ok(true),
        }
    }

    /// Short label for the active backend.
    pub fn backend(&self) -> &'static str {
        if self.database.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}
