use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use axum_helpers::{ApiResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, ProductResponse};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "products";

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(create_product, get_selling_products),
    components(schemas(CreateProduct, ProductResponse)),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/new", post(create_product))
        .route("/selling", get(get_selling_products))
        .with_state(shared_service)
}

/// Register a new product
#[utoipa::path(
    post,
    path = "/new",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Internal server error")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<ApiResponse<ProductResponse>> {
    let product = service.create_product(input).await?;
    Ok(ApiResponse::ok(product.into()))
}

/// Products currently shown on the menu
#[utoipa::path(
    get,
    path = "/selling",
    tag = TAG,
    responses(
        (status = 200, description = "Displayable products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
async fn get_selling_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<ApiResponse<Vec<ProductResponse>>> {
    let products = service.get_selling_products().await?;
    Ok(ApiResponse::ok(products.into_iter().map(Into::into).collect()))
}
