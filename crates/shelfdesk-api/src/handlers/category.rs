//! Category handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use shelfdesk_core::types::pagination::PageResponse;
use shelfdesk_entity::category::Category;
use shelfdesk_service::validation::CategoryPayload;

use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AdminSession, JsonBody, PaginationParams};
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PageResponse<Category>>> {
    let page = params.into_page_request(state.default_page_size());
    Ok(Json(state.category_service.list(&page).await?))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> ApiResult<Json<Category>> {
    Ok(Json(state.category_service.get(parse_uuid(&id)?).await?))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    session: AdminSession,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.category_service.create(&session, payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> ApiResult<Json<Category>> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.category_service.update(&session, id, payload).await?))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .category_service
        .delete(&session, parse_uuid(&id)?)
        .await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
