//! Route definitions for the ShelfDesk HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! Every route except health and the auth endpoints passes through the
//! [`AdminSession`](crate::extractors::AdminSession) extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(product_routes())
        .merge(category_routes())
        .merge(notification_routes())
        .merge(report_routes())
        .merge(audit_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: login, logout, status
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/status", get(handlers::auth::status))
}

/// Product CRUD
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
}

/// Category CRUD
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/categories/{id}",
            get(handlers::category::get_category)
                .put(handlers::category::update_category)
                .delete(handlers::category::delete_category),
        )
}

/// Derived notifications
fn notification_routes() -> Router<AppState> {
    Router::new().route(
        "/notifications",
        get(handlers::notification::list_notifications),
    )
}

/// Dashboard KPIs
fn report_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard::dashboard))
}

/// Audit log
fn audit_routes() -> Router<AppState> {
    Router::new().route("/audit", get(handlers::audit::search_audit))
}

/// Health check (no session required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
