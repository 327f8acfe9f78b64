//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use shelfdesk_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Handler error. Wraps [`AppError`] so it can be turned into a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self.0.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Authentication | ErrorKind::Authorization => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn into_body(self) -> ApiErrorResponse {
        let (_, code) = self.status_and_code();
        let err = self.0;

        let message = match err.kind {
            ErrorKind::Authorization => "Unauthorized".to_string(),
            _ if err.is_server_fault() => "Internal server error".to_string(),
            _ => err.message,
        };

        let details = (!err.fields.is_empty())
            .then(|| serde_json::json!({ "errors": err.fields }));

        ApiErrorResponse {
            error: code.to_string(),
            message,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();

        if self.0.is_server_fault() {
            tracing::error!(
                kind = %self.0.kind,
                error = %self.0.message,
                source = ?self.0.source,
                "Internal server error"
            );
        }

        (status, Json(self.into_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use shelfdesk_core::error::FieldError;

    use super::*;

    #[test]
    fn test_validation_carries_field_details() {
        let err = ApiError::from(AppError::invalid_fields(vec![FieldError::new(
            "price",
            "Price must be greater than 0",
        )]));
        assert_eq!(err.status_and_code().0, StatusCode::BAD_REQUEST);

        let body = err.into_body();
        assert_eq!(body.message, "Price must be greater than 0");
        let details = body.details.expect("details");
        assert_eq!(details["errors"][0]["field"], "price");
    }

    #[test]
    fn test_authorization_is_uniform() {
        let err = ApiError::from(AppError::authorization("token abc expired"));
        assert_eq!(err.status_and_code().0, StatusCode::UNAUTHORIZED);
        assert_eq!(err.into_body().message, "Unauthorized");
    }

    #[test]
    fn test_server_faults_hide_detail() {
        let err = ApiError::from(AppError::database("relation \"products\" does not exist"));
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.into_body();
        assert_eq!(body.message, "Internal server error");
        assert!(body.details.is_none());
    }

    #[test]
    fn test_conflict_keeps_message() {
        let err = ApiError::from(AppError::conflict(
            "Cannot delete category. It is used by 2 product(s).",
        ));
        assert_eq!(err.status_and_code().0, StatusCode::CONFLICT);
        assert!(err.into_body().message.contains("2 product(s)"));
    }
}
