//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every error leaves the
//! server wrapped in the same [`ApiResponse`] envelope as a success.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::response::ApiResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("account not found")]
    AccountNotFound,

    #[error("password error")]
    PasswordError,

    #[error("account locked")]
    AccountLocked,

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Message sent to clients for faults they cannot act on.
pub const UNKNOWN_ERROR: &str = "unknown error";

impl AppError {
    /// HTTP status for this error. Business rule violations are reported
    /// inside a 200 envelope; only protocol-level problems change the status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AccountNotFound
            | AppError::PasswordError
            | AppError::AccountLocked
            | AppError::AlreadyExists(_) => StatusCode::OK,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                UNKNOWN_ERROR.to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                UNKNOWN_ERROR.to_string()
            }
            other => {
                tracing::debug!(error = %other, "Request rejected");
                other.to_string()
            }
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}
