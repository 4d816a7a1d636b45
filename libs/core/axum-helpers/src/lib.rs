//! # Axum Helpers
//!
//! Shared plumbing for the kiosk HTTP services:
//!
//! - **[`errors`]**: the [`AppError`] type and envelope-formatted error responses
//! - **[`response`]**: the `{code, status, message, data}` response envelope
//! - **[`extractors`]**: JSON extraction with automatic validation
//! - **[`http`]**: security-header middleware
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

pub use errors::AppError;
pub use extractors::ValidatedJson;
pub use http::security_headers;
pub use response::ApiResponse;
pub use server::{create_app, create_router, health_router, shutdown_signal, HealthResponse};
