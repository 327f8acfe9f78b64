//! Notification feed handler.

use axum::Json;
use axum::extract::{Query, State};

use shelfdesk_service::notification::NotificationFeed;

use crate::dto::request::NotificationQuery;
use crate::error::ApiResult;
use crate::extractors::AdminSession;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(query): Query<NotificationQuery>,
) -> ApiResult<Json<NotificationFeed>> {
    let sorted = query.view.as_deref() == Some("sorted");
    Ok(Json(state.notification_service.feed(sorted).await?))
}
