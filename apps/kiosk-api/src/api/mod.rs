//! API routes module

pub mod health;

use axum::Router;
use database::postgres::DatabaseConnection;
use domain_orders::{OrderService, PgOrderRepository};
use domain_products::{PgProductRepository, ProductService};

/// Create all API routes
pub fn routes(db: DatabaseConnection) -> Router {
    let product_service = ProductService::new(PgProductRepository::new(db.clone()));
    let order_service = OrderService::new(
        PgOrderRepository::new(db.clone()),
        PgProductRepository::new(db.clone()),
    );

    Router::new()
        .nest("/v1/products", domain_products::handlers::router(product_service))
        .nest("/v1/orders", domain_orders::handlers::router(order_service))
        .merge(health::router(db))
}
