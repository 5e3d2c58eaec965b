//! Error codes and the JSON error response.
//!
//! DESIGN
//! ======
//! Each concern keeps its own `thiserror` enum. They all implement
//! [`ErrorCode`], which gives a stable machine-readable code and a retry
//! hint; route handlers turn them into an [`ApiError`] with a status code.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub retryable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, err: &impl ErrorCode) -> Self {
        Self {
            status,
            body: ErrorBody { error: err.error_code(), message: err.to_string(), retryable: err.retryable() },
        }
    }

    pub fn plain(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self { status, body: ErrorBody { error: code, message: message.into(), retryable: false } }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
