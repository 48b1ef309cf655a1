//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable and notification worker running
/// - **503 Service Unavailable**: One of the above failed
///
/// The email check is informational: a missing provider key only means
/// notifications are skipped, so it never degrades the service.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "notification_queue": { "status": "ok", "message": "Capacity: 1000/1000" },
///     "email": { "status": "ok", "message": "Resend configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let queue_check = check_notification_queue(&state);

    let email_check = check_email(&state);

    let all_healthy = db_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            notification_queue: queue_check,
            email: email_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.shipment_service.ping().await {
        Ok(()) => CheckStatus::ok("Connected"),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

fn check_notification_queue(state: &AppState) -> CheckStatus {
    let queue = &state.notification_service;
    if queue.is_closed() {
        CheckStatus::error("Notification worker is not running")
    } else {
        CheckStatus::ok(format!(
            "Capacity: {}/{}",
            queue.capacity(),
            queue.max_capacity()
        ))
    }
}

fn check_email(state: &AppState) -> CheckStatus {
    if state.site.email_enabled {
        CheckStatus::ok("Resend configured")
    } else {
        CheckStatus::ok("Not configured, notifications are skipped")
    }
}
