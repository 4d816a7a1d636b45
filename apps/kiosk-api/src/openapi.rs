//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Kiosk API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kiosk API",
        version = "0.1.0",
        description = "Cafe product catalog and order intake API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/products", api = domain_products::ApiDoc),
        (path = "/api/v1/orders", api = domain_orders::ApiDoc)
    ),
    tags(
        (name = "products", description = "Product catalog endpoints"),
        (name = "orders", description = "Order intake endpoints")
    )
)]
pub struct ApiDoc;
