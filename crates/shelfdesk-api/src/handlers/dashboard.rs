//! Dashboard report handler.

use axum::Json;
use axum::extract::State;

use shelfdesk_service::report::DashboardReport;

use crate::error::ApiResult;
use crate::extractors::AdminSession;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _session: AdminSession,
) -> ApiResult<Json<DashboardReport>> {
    Ok(Json(state.report_service.dashboard().await?))
}
