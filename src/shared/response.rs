//! Response Envelope
//!
//! Uniform `{code, msg, data}` wrapper returned by every endpoint.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Envelope code for a successful call
pub const SUCCESS_CODE: i32 = 1;

/// Envelope code for a failed call
pub const ERROR_CODE: i32 = 0;

/// Uniform API response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: None,
            data: Some(data),
        }
    }

    /// Successful response with no payload
    pub fn ok() -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: None,
            data: None,
        }
    }

    /// Failed response with a human-readable message
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            code: ERROR_CODE,
            msg: Some(msg.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
