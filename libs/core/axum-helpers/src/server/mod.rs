//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI documentation
//! - `/health` liveness endpoint
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! let router = create_router::<ApiDoc>(api_routes)?;
//! let app = router.merge(health_router(app_info!()));
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{health_router, HealthResponse};
pub use shutdown::shutdown_signal;
