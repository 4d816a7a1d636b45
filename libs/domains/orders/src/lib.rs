//! Orders Domain
//!
//! Order intake for the kiosk: resolving requested product numbers
//! against the catalog, pricing the order, and persisting it together
//! with its line items.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Product resolution, pricing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{CreateOrder, Order, OrderResponse, OrderStatus};
pub use postgres::PgOrderRepository;
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use service::OrderService;
