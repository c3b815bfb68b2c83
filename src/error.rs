// HTTP API Error Types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::auth::{PasswordError, TokenError};
use crate::database::DatabaseError;

/// Public message returned for 500s when details are hidden.
pub const GENERIC_SERVER_ERROR: &str = "server error";

/// Body of every auth rejection.
pub const UNAUTHORIZED_REQUEST: &str = "Unauthorized request";

/// HTTP API error, one variant per response class
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("{0}")]
    Validation(String),

    // 401 Unauthorized. The reason is logged, never sent.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    // 403 Forbidden
    #[error("{0}")]
    Forbidden(String),

    // 404 Not Found
    #[error("{0}")]
    NotFound(String),

    // 500 Internal Server Error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Internal failure text attached to 500 responses so an outer layer can
/// decide whether to reveal it.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        ApiError::Unauthorized(reason.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal(detail.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing JSON body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Unauthorized(_) => json!({ "error": UNAUTHORIZED_REQUEST }),
            ApiError::Internal(_) => message_body(GENERIC_SERVER_ERROR),
            ApiError::Validation(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message) => message_body(message),
        }
    }
}

/// `{"error": {"message": ...}}`
pub fn message_body(message: &str) -> Value {
    json!({ "error": { "message": message } })
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_json());

        if let ApiError::Internal(detail) = self {
            tracing::error!("Unhandled server error: {}", detail);
            let mut response = (status, body).into_response();
            response.extensions_mut().insert(ErrorDetail(detail));
            return response;
        }

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(ApiError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::internal("x").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unauthorized_body_hides_reason() {
        let body = ApiError::unauthorized("bad signature").to_json();
        assert_eq!(body, json!({ "error": "Unauthorized request" }));
    }

    #[test]
    fn handler_errors_use_message_envelope() {
        let body = ApiError::not_found("Brewery doesn't exist").to_json();
        assert_eq!(body, json!({ "error": { "message": "Brewery doesn't exist" } }));
    }

    #[test]
    fn internal_errors_carry_detail_in_extensions() {
        let response = ApiError::internal("connection reset").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = response.extensions().get::<ErrorDetail>().map(|d| d.0.clone());
        assert_eq!(detail.as_deref(), Some("connection reset"));
    }
}
