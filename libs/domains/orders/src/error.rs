use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Unknown product number: {0}")]
    UnknownProductNumber(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Convert OrderError to AppError for standardized error responses
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::UnknownProductNumber(number) => {
                AppError::NotFound(format!("Product {} not found", number))
            }
            OrderError::Validation(msg) => AppError::BadRequest(msg),
            OrderError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
