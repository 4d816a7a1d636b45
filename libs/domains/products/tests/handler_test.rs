use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use domain_products::{
    handlers, CreateProduct, InMemoryProductRepository, ProductSellingStatus, ProductService,
    ProductType,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_router() -> Router {
    let service = ProductService::new(InMemoryProductRepository::new());
    handlers::router(service)
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn create_product_returns_enveloped_product() {
    let app = test_router();

    let response = app
        .oneshot(post_json(
            "/new",
            json!({
                "product_type": "handmade",
                "selling_status": "selling",
                "name": "americano",
                "price": 4000
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["code"], 200);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["data"]["product_number"], "001");
    assert_eq!(body["data"]["name"], "americano");
    assert_eq!(body["data"]["price"], 4000);
}

#[tokio::test]
async fn create_product_defaults_selling_status_to_hold() {
    let app = test_router();

    let response = app
        .oneshot(post_json(
            "/new",
            json!({
                "product_type": "bakery",
                "name": "croissant",
                "price": 3500
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["data"]["selling_status"], "hold");
}

#[tokio::test]
async fn create_product_rejects_empty_name() {
    let app = test_router();

    let response = app
        .oneshot(post_json(
            "/new",
            json!({
                "product_type": "handmade",
                "selling_status": "selling",
                "name": "",
                "price": 4000
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["status"], "BAD_REQUEST");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn selling_products_exclude_stopped_items() {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);

    for (status, name, price) in [
        (ProductSellingStatus::Selling, "americano", 4000),
        (ProductSellingStatus::Hold, "latte", 4500),
        (ProductSellingStatus::StopSelling, "shaved ice", 7000),
    ] {
        service
            .create_product(CreateProduct {
                product_type: ProductType::Handmade,
                selling_status: status,
                name: name.to_string(),
                price,
            })
            .await
            .unwrap();
    }

    let app = handlers::router(service);
    let response = app
        .oneshot(Request::builder().uri("/selling").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"americano"));
    assert!(names.contains(&"latte"));
    assert!(!names.contains(&"shaved ice"));
}
