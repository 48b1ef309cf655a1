mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use courier_portal::api::handlers::{contact_handler, verify_captcha_handler};

/// `score` of `None` leaves reCAPTCHA unconfigured.
fn make_server(pool: PgPool, score: Option<f64>) -> TestServer {
    let (state, _rx) = common::create_test_state_with_captcha(pool, score);
    let app = Router::new()
        .route("/api/verify-recaptcha", post(verify_captcha_handler))
        .route("/api/contact", post(contact_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

fn contact_body() -> Value {
    json!({
        "name": "Jane Customer",
        "email": "jane@example.com",
        "subject": "Delivery question",
        "message": "When will my parcel arrive?",
        "recaptchaToken": "token"
    })
}

// ─── VERIFY ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_verify_captcha_passes(pool: PgPool) {
    let server = make_server(pool, Some(0.9));

    let response = server
        .post("/api/verify-recaptcha")
        .json(&json!({ "token": "abc" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true, "score": 0.9 }));
}

#[sqlx::test]
async fn test_verify_captcha_low_score(pool: PgPool) {
    let server = make_server(pool, Some(0.2));

    let response = server
        .post("/api/verify-recaptcha")
        .json(&json!({ "token": "abc" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "success": false,
        "message": "reCAPTCHA verification failed",
        "score": 0.2
    }));
}

#[sqlx::test]
async fn test_verify_captcha_missing_token(pool: PgPool) {
    let server = make_server(pool, Some(0.9));

    let response = server
        .post("/api/verify-recaptcha")
        .json(&json!({}))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Token is missing");
}

#[sqlx::test]
async fn test_verify_captcha_not_configured(pool: PgPool) {
    let server = make_server(pool, None);

    server
        .post("/api/verify-recaptcha")
        .json(&json!({ "token": "abc" }))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

// ─── CONTACT ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_contact_accepted(pool: PgPool) {
    let server = make_server(pool, Some(0.8));

    let response = server.post("/api/contact").json(&contact_body()).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["success"], true);
}

#[sqlx::test]
async fn test_contact_rejected_by_captcha(pool: PgPool) {
    let server = make_server(pool, Some(0.1));

    let response = server.post("/api/contact").json(&contact_body()).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "reCAPTCHA verification failed"
    );
}

#[sqlx::test]
async fn test_contact_invalid_email(pool: PgPool) {
    let server = make_server(pool, Some(0.9));
    let mut body = contact_body();
    body["email"] = json!("nope");

    server
        .post("/api/contact")
        .json(&body)
        .await
        .assert_status_bad_request();
}
