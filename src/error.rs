//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Server errors (5xx)
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl AppError {
    /// Classify a failed insert.
    ///
    /// Unique violations become `Duplicate` with `duplicate_message` and check
    /// violations become `Validation`. Everything else, foreign key failures
    /// included, stays a store error.
    pub fn from_insert(err: sqlx::Error, duplicate_message: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return AppError::Duplicate(duplicate_message.to_string());
            }
            if db_err.is_check_violation() {
                return AppError::Validation(db_err.message().to_string());
            }
        }
        AppError::Store(err)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // 400 Bad Request
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", Some(msg.clone()))
            }

            // 409 Conflict
            AppError::Duplicate(_) => (StatusCode::CONFLICT, "duplicate", None),

            AppError::Domain(domain_err) => match domain_err {
                DomainError::MissingField(field) => {
                    (StatusCode::BAD_REQUEST, "missing_field", Some(field.to_string()))
                }
                DomainError::RatingOutOfRange(_) => {
                    (StatusCode::BAD_REQUEST, "rating_out_of_range", None)
                }
                DomainError::NotRegistered { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "not_registered", None)
                }
            },

            // 500 Internal Server Error
            AppError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "store_error", Some(e.to_string()))
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
