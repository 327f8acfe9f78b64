//! Product handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use shelfdesk_core::result::AppResult;
use shelfdesk_core::types::pagination::PageResponse;
use shelfdesk_entity::product::{Product, ProductListItem};
use shelfdesk_service::product::{SortKey, TableView};
use shelfdesk_service::validation::ProductPayload;

use crate::dto::request::ProductTableQuery;
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AdminSession, JsonBody, PaginationParams};
use crate::state::AppState;

fn table_view(query: ProductTableQuery) -> AppResult<TableView> {
    Ok(TableView {
        search: query
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        stock: query.stock.as_deref().unwrap_or_default().parse()?,
        category: query.category.as_deref().unwrap_or_default().parse()?,
        sort: SortKey::parse_optional(query.sort.as_deref().unwrap_or_default())?,
    })
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(params): Query<PaginationParams>,
    Query(query): Query<ProductTableQuery>,
) -> ApiResult<Json<PageResponse<ProductListItem>>> {
    let page = params.into_page_request(state.default_page_size());
    let view = table_view(query)?;
    let result = state.product_service.list_view(&page, &view).await?;
    Ok(Json(result))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let product = state.product_service.get(parse_uuid(&id)?).await?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    session: AdminSession,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = state.product_service.create(&session, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ApiResult<Json<Product>> {
    let id = parse_uuid(&id)?;
    let product = state.product_service.update(&session, id, payload).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .product_service
        .delete(&session, parse_uuid(&id)?)
        .await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
