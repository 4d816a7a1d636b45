use axum::{extract::State, routing::post, Router};
use axum_helpers::{ApiResponse, ValidatedJson};
use chrono::Utc;
use domain_products::ProductRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderResult;
use crate::models::{CreateOrder, OrderResponse};
use crate::repository::OrderRepository;
use crate::service::OrderService;

const TAG: &str = "orders";

/// OpenAPI documentation for the orders API
#[derive(OpenApi)]
#[openapi(
    paths(create_order),
    components(schemas(CreateOrder, OrderResponse)),
    tags(
        (name = TAG, description = "Order intake endpoints")
    )
)]
pub struct ApiDoc;

/// Create the orders router with all HTTP endpoints
pub fn router<OR, PR>(service: OrderService<OR, PR>) -> Router
where
    OR: OrderRepository + 'static,
    PR: ProductRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/new", post(create_order))
        .with_state(shared_service)
}

/// Place a new order
#[utoipa::path(
    post,
    path = "/new",
    tag = TAG,
    request_body = CreateOrder,
    responses(
        (status = 200, description = "Order accepted", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Unknown product number"),
        (status = 500, description = "Internal server error")
    )
)]
async fn create_order<OR, PR>(
    State(service): State<Arc<OrderService<OR, PR>>>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> OrderResult<ApiResponse<OrderResponse>>
where
    OR: OrderRepository,
    PR: ProductRepository,
{
    let order = service.create_order(input, Utc::now()).await?;
    Ok(ApiResponse::ok(order.into()))
}
