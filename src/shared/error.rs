//! Application Error Types
//!
//! Centralized error handling with Axum integration. `AppError` is the
//! domain error taxonomy; its `IntoResponse` impl is the translation layer
//! that maps domain errors to the client-facing response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body following the `{status, message}` envelope.
///
/// Client errors carry `status: "fail"` and their domain message; server
/// errors carry `status: "error"` and a generic message so internal details
/// never leak.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "fail", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "fail", msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "fail", msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "fail", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "fail", msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    "terjadi kegagalan pada server kami".into(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    "terjadi kegagalan pada server kami".into(),
                )
            }
        };

        let body = ErrorResponse { status, message };

        (status_code, Json(body)).into_response()
    }
}
