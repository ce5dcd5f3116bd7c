//! Error types and HTTP error response handling.
//!
//! This module defines all request-path errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.
//! Outbound webhook failures are deliberately absent: they never reach a
//! caller (see [`crate::services::webhook_service`]).

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::cache::CacheError;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation Errors**: Malformed request bodies, rejected before any
///   business logic runs
/// - **Resource Errors**: Requested transaction not found
/// - **Infrastructure Errors**: Database or cache failures, surfaced as an
///   opaque server error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Cache read, write or delete failed.
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Metrics could not be encoded.
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// No transaction exists with the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// Request body could not be parsed into the expected shape.
    ///
    /// Keeps the status axum picked (400, 415 or 422).
    #[error("Invalid request: {0}")]
    InvalidJson(#[from] JsonRejection),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `TransactionNotFound` → 404 Not Found
/// - `InvalidJson` → status chosen by the JSON extractor
/// - `Database`, `Cache`, `Metrics` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::TransactionNotFound => (
                StatusCode::NOT_FOUND,
                "transaction_not_found",
                self.to_string(),
            ),
            AppError::InvalidJson(ref rejection) => {
                (rejection.status(), "invalid_request", rejection.body_text())
            }
            AppError::Database(_) | AppError::Cache(_) | AppError::Metrics(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
