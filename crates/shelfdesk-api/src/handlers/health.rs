//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let reachable = match state.stores.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Record store health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if reachable { "ok" } else { "degraded" }.to_string(),
        backend: state.stores.backend().to_string(),
        database: if reachable { "connected" } else { "unreachable" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
