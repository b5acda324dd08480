//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-field validation messages, ordered by field name.
///
/// Carried by [`AppError::Validation`] so callers can branch on the
/// error kind and surface actionable field-level messages instead of
/// a generic failure string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field, keeping earlier messages for that field.
    pub fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for one field, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|messages| messages.as_slice())
    }

    /// Iterate fields with their messages.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// All messages, flattened across fields.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation (field-level, recoverable by the caller)
    #[error("Validation failed")]
    Validation(FieldErrors),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Show field messages for client errors
            AppError::Validation(errors) => {
                errors.messages().collect::<Vec<_>>().join(" ")
            }

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
