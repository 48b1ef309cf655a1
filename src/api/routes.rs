//! API route configuration.
//!
//! Routes are grouped by protection: admin routes sit behind
//! [`crate::api::middleware::auth`], public routes are only rate limited.

use crate::api::handlers::{
    contact_handler, create_shipment_handler, list_shipments_handler, login_handler,
    logout_handler, register_handler, session_handler, tracking_handler, update_shipment_handler,
    verify_captcha_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Admin routes, protected by session authentication.
///
/// # Endpoints
///
/// - `POST /shipments/create` - Create a shipment with its initial event
/// - `GET  /shipments/list`   - All shipments with events
/// - `POST /shipments/update` - Set status, append event, notify parties
/// - `GET  /auth/session`     - Current admin user
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shipments/create", post(create_shipment_handler))
        .route("/shipments/list", get(list_shipments_handler))
        .route("/shipments/update", post(update_shipment_handler))
        .route("/auth/session", get(session_handler))
}

/// Public routes under the general rate limit.
///
/// # Endpoints
///
/// - `GET  /tracking/{id}` - Public tracking view
/// - `POST /auth/logout`   - Clear the session cookie
/// - `POST /register`      - Disabled registration
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/tracking/{id}", get(tracking_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/register", post(register_handler))
}

/// Public routes under the strict rate limit.
///
/// # Endpoints
///
/// - `POST /auth/login`        - Admin login
/// - `POST /contact`           - Contact form
/// - `POST /verify-recaptcha`  - reCAPTCHA token check
pub fn sensitive_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/contact", post(contact_handler))
        .route("/verify-recaptcha", post(verify_captcha_handler))
}
