//! `AdminSession` extractor: finds the session token, asks the session
//! gate about it, and injects a request context.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use shelfdesk_core::error::AppError;
use shelfdesk_core::traits::SessionGate;
use shelfdesk_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// An authenticated admin request.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Actor and client address for audit entries.
    pub context: RequestContext,
    /// The presented session token.
    pub token: String,
}

impl std::ops::Deref for AdminSession {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

/// Session token from the named cookie, else from a Bearer header.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let from_cookie = CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty());

    from_cookie.or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    })
}

/// First address in `x-forwarded-for`, or empty.
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|ip| ip.trim().to_string())
        .unwrap_or_default()
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers, &state.config.auth.cookie_name)
            .ok_or_else(|| AppError::authorization("Missing session token"))?;

        if !state.authenticator.is_authenticated(&token).await {
            debug!(path = %parts.uri.path(), "Session gate rejected request");
            return Err(AppError::authorization("Invalid or expired session").into());
        }

        let context = RequestContext::new(
            state.authenticator.username(),
            client_ip(&parts.headers),
        );

        Ok(AdminSession { context, token })
    }
}
