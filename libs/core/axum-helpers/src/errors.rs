//! Application error type with envelope-formatted HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

use crate::response::ApiResponse;

/// Application error type that converts into envelope-formatted responses.
///
/// Domain crates define their own error enums and provide a
/// `From<DomainError> for AppError` so handlers can bubble errors with `?`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                (e.status(), e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {}", e);
                (StatusCode::BAD_REQUEST, flatten_validation_errors(&e))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        ApiResponse::<serde_json::Value>::error(status, message).into_response()
    }
}

/// Render validator errors as "field: code" pairs in a single message.
fn flatten_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                match &err.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, err.code),
                }
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    ApiResponse::<serde_json::Value>::error(
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
    .into_response()
}
