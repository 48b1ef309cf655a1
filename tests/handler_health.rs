mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;
use courier_portal::api::handlers::health_handler;

#[sqlx::test]
async fn test_health_ok(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["notification_queue"]["status"], "ok");
    assert_eq!(body["checks"]["email"]["status"], "ok");
}

#[sqlx::test]
async fn test_health_degraded_when_worker_stopped(pool: PgPool) {
    let (state, rx) = common::create_test_state(pool);
    drop(rx);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["notification_queue"]["status"], "error");
}
