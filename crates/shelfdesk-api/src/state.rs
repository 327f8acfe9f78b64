//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use shelfdesk_auth::Authenticator;
use shelfdesk_core::config::AppConfig;
use shelfdesk_core::result::AppResult;
use shelfdesk_database::Stores;
use shelfdesk_service::{
    AuditRecorder, CategoryService, NotificationEngine, NotificationService, ProductService,
    ReportService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Admin credential check and session gate
    pub authenticator: Arc<Authenticator>,
    /// Product service
    pub product_service: Arc<ProductService>,
    /// Category service
    pub category_service: Arc<CategoryService>,
    /// Notification feed
    pub notification_service: Arc<NotificationService>,
    /// Dashboard reports
    pub report_service: Arc<ReportService>,
    /// Audit log access
    pub audit: AuditRecorder,
    /// Record stores, kept for health checks
    pub stores: Stores,
}

impl AppState {
    /// Wire services over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> AppResult<Self> {
        let authenticator = Arc::new(Authenticator::new(&config.auth)?);
        let audit = AuditRecorder::new(Arc::clone(&stores.audit));
        let threshold = config.catalog.low_stock_threshold;

        let product_service = Arc::new(ProductService::new(
            Arc::clone(&stores.products),
            audit.clone(),
        ));
        let category_service = Arc::new(CategoryService::new(
            Arc::clone(&stores.categories),
            Arc::clone(&stores.products),
            audit.clone(),
        ));
        let notification_service = Arc::new(NotificationService::new(
            Arc::clone(&stores.products),
            Arc::clone(&stores.categories),
            NotificationEngine::new(threshold),
        ));
        let report_service = Arc::new(ReportService::new(
            Arc::clone(&stores.products),
            Arc::clone(&stores.categories),
            threshold,
        ));

        Ok(Self {
            config: Arc::new(config),
            authenticator,
            product_service,
            category_service,
            notification_service,
            report_service,
            audit,
            stores,
        })
    }

    /// Page size used when a list request omits `limit`.
    pub fn default_page_size(&self) -> u64 {
        self.config.catalog.page_size()
    }
}
