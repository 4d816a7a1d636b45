//! Generic response envelope shared by all API endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Response envelope: `{code, status, message, data}`.
///
/// Every v1 endpoint returns this shape, success and failure alike, so
/// clients can branch on `code` without inspecting HTTP status lines.
/// `data` is `null` for error responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Numeric HTTP status code (e.g. 200)
    pub code: u16,
    /// Status identifier (e.g. "OK", "BAD_REQUEST")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Payload, absent on errors
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn of(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            status: status_name(status),
            message: message.into(),
            data,
        }
    }

    /// 200 OK with a payload
    pub fn ok(data: T) -> Self {
        Self::of(StatusCode::OK, status_name(StatusCode::OK), Some(data))
    }

    /// Error envelope with no payload
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::of(status, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Uppercase identifier for a status code ("Bad Request" -> "BAD_REQUEST")
fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_carries_payload() {
        let response = ApiResponse::ok(vec![1, 2, 3]);
        assert_eq!(response.code, 200);
        assert_eq!(response.status, "OK");
        assert_eq!(response.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn error_envelope_has_no_payload() {
        let response = ApiResponse::<()>::error(StatusCode::BAD_REQUEST, "bad input");
        assert_eq!(response.code, 400);
        assert_eq!(response.status, "BAD_REQUEST");
        assert_eq!(response.message, "bad input");
        assert!(response.data.is_none());
    }

    #[test]
    fn status_names_are_upper_snake_case() {
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_name(StatusCode::INTERNAL_SERVER_ERROR), "INTERNAL_SERVER_ERROR");
    }
}
