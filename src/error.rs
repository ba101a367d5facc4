//! Application error type and its HTTP representation.
//!
//! Every failure surfaced at the HTTP boundary is an [`AppError`]. Store
//! and credential details never reach response bodies; causes are logged
//! server-side before being collapsed into a generic internal error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application-level error, mapped onto an HTTP status by [`IntoResponse`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client-input error → `400 Bad Request`.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Unknown resource → `404 Not Found`.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Uniqueness violation → `409 Conflict`.
    ///
    /// The allocator intercepts this variant to retry with a fresh code;
    /// it only reaches a client if retries are exhausted elsewhere.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Store or allocator failure → `500 Internal Server Error`.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");
        AppError::internal("Database error", json!({}))
    }
}
