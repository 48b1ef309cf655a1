#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use courier_portal::application::services::{
    AdminCredentials, AuthService, CaptchaService, NotificationService, ShipmentService,
    TrackingService,
};
use courier_portal::domain::notification::StatusNotification;
use courier_portal::infrastructure::captcha::{CaptchaError, CaptchaVerdict, CaptchaVerifier};
use courier_portal::infrastructure::persistence::PgShipmentRepository;
use courier_portal::routes::unlimited_router;
use courier_portal::state::{AppState, SiteSettings};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const ADMIN_EMAIL: &str = "admin@fastrocket.com";
pub const ADMIN_PASSWORD: &str = "password123";
pub const SESSION_SECRET: &str = "test-session-secret-that-is-long-enough";

/// Verifier answering every token with the same score.
pub struct FixedScoreVerifier(pub f64);

#[async_trait]
impl CaptchaVerifier for FixedScoreVerifier {
    async fn verify(&self, _token: &str) -> Result<CaptchaVerdict, CaptchaError> {
        Ok(CaptchaVerdict {
            success: true,
            score: Some(self.0),
            ..CaptchaVerdict::default()
        })
    }
}

pub async fn create_test_shipment(pool: &PgPool, tracking_number: &str, status: &str) -> i64 {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO shipments (
            tracking_number, sender_name, sender_address, sender_phone, sender_email,
            receiver_name, receiver_address, receiver_phone, receiver_email,
            weight, service_type, status, date_sent, estimated_delivery
        )
        VALUES ($1, 'Alice Sender', '1 Main St, Lagos', '+2348000000001', 'alice@example.com',
                'Bob Receiver', '9 High St, London', '+447000000002', 'bob@example.com',
                '2.5', 'express', $2, '2025-01-10', '2025-01-15')
        RETURNING id
        "#,
    )
    .bind(tracking_number)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query(
        r#"INSERT INTO shipment_events (shipment_id, status, location, description, "timestamp")
           VALUES ($1, 'created', 'Lagos', 'Shipment information received', NOW() - INTERVAL '1 day')"#,
    )
    .bind(id)
    .execute(pool)
    .await
    .unwrap();

    id
}

pub async fn count_events(pool: &PgPool, tracking_number: &str) -> i64 {
    sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM shipment_events e
           JOIN shipments s ON s.id = e.shipment_id
           WHERE s.tracking_number = $1"#,
    )
    .bind(tracking_number)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<StatusNotification>) {
    create_test_state_with_captcha(pool, Some(0.9))
}

/// `captcha_score` of `None` leaves reCAPTCHA unconfigured.
pub fn create_test_state_with_captcha(
    pool: PgPool,
    captcha_score: Option<f64>,
) -> (AppState, mpsc::Receiver<StatusNotification>) {
    let repository = Arc::new(PgShipmentRepository::new(Arc::new(pool)));
    let shipment_service = Arc::new(ShipmentService::new(repository));
    let tracking_service = Arc::new(TrackingService::new(shipment_service.clone()));

    let auth_service = Arc::new(AuthService::new(
        AdminCredentials {
            email: ADMIN_EMAIL.to_string(),
            name: "Admin".to_string(),
            password_hash: bcrypt::hash(ADMIN_PASSWORD, 4).unwrap(),
        },
        SESSION_SECRET,
        chrono::Duration::days(30),
    ));

    let verifier = captcha_score
        .map(|score| Arc::new(FixedScoreVerifier(score)) as Arc<dyn CaptchaVerifier>);
    let captcha_service = Arc::new(CaptchaService::new(verifier, 0.5));

    let (notification_service, rx) = NotificationService::channel(16);

    let mut site = SiteSettings::new("http://localhost:3000");
    site.recaptcha_site_key = Some("test-site-key".to_string());

    let state = AppState {
        shipment_service,
        tracking_service,
        notification_service,
        auth_service,
        captcha_service,
        site: Arc::new(site),
    };

    (state, rx)
}

/// Full application router without rate limiting.
pub fn make_app_server(state: AppState) -> TestServer {
    TestServer::new(unlimited_router(state)).unwrap()
}

pub async fn admin_token(state: &AppState) -> String {
    state
        .auth_service
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap()
        .token
}
