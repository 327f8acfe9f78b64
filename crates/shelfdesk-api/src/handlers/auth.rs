//! Auth handlers: login, logout, status.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use shelfdesk_auth::session::session_lifetime_seconds;
use shelfdesk_core::config::AuthConfig;
use shelfdesk_core::error::AppError;
use shelfdesk_core::traits::SessionGate;

use crate::dto::request::LoginRequest;
use crate::dto::response::{AuthStatusResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::JsonBody;
use crate::extractors::auth::session_token;
use crate::state::AppState;

fn session_cookie(config: &AuthConfig, value: String, max_age: time::Duration) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .max_age(max_age)
        .build()
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let token = state.authenticator.login(&req.username, &req.password)?;

    let auth = &state.config.auth;
    let max_age = session_lifetime_seconds(auth.session_max_age_seconds);
    let cookie = session_cookie(auth, token, time::Duration::seconds(max_age));

    Ok((
        jar.add(cookie),
        Json(MessageResponse::new("Login successful")),
    ))
}

/// POST /api/auth/logout
///
/// Revokes the presented token, if any, and always clears the cookie.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let auth = &state.config.auth;
    if let Some(token) = session_token(&headers, &auth.cookie_name) {
        state.authenticator.logout(&token);
    }

    let cleared = session_cookie(auth, String::new(), time::Duration::ZERO);
    (jar.add(cleared), Json(MessageResponse::new("Logged out")))
}

/// GET /api/auth/status
pub async fn status(State(state): State<AppState>, headers: HeaderMap) -> Json<AuthStatusResponse> {
    let authenticated = match session_token(&headers, &state.config.auth.cookie_name) {
        Some(token) => state.authenticator.is_authenticated(&token).await,
        None => false,
    };
    Json(AuthStatusResponse { authenticated })
}
