//! JSON extractor with automatic validation using the validator crate.

use axum::extract::{FromRequest, Json, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON extractor that runs the payload through `validator::Validate`.
///
/// Malformed JSON and failed validations both come back as
/// envelope-formatted 4xx responses.
///
/// # Example
/// ```ignore
/// async fn create_product(
///     ValidatedJson(request): ValidatedJson<ProductCreateRequest>,
/// ) -> ProductResult<impl IntoResponse> { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::ValidationError(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
