//! Readiness endpoint backed by the database connection

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use database::postgres::DatabaseConnection;
use serde::Serialize;

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
}

/// Readiness handler. 200 while the database answers, 503 otherwise.
async fn ready(State(db): State<DatabaseConnection>) -> Response {
    match database::postgres::check_health(&db).await {
        Ok(()) => (StatusCode::OK, Json(ReadyResponse { status: "ready" })).into_response(),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "unavailable",
                }),
            )
                .into_response()
        }
    }
}

pub fn router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use tower::ServiceExt;

    async fn probe(db: DatabaseConnection) -> (StatusCode, serde_json::Value) {
        let response = router(db)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn ready_while_the_database_answers() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let (status, body) = probe(db).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn unavailable_when_the_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let (status, body) = probe(db).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
    }
}
