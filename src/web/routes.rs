//! HTML route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, contact_handler, cookies_handler, create_page_handler, create_submit_handler,
    dashboard_handler, faq_handler, home_handler, login_page_handler, login_submit_handler,
    logout_handler, privacy_handler, refunds_handler, services_handler, shipping_handler,
    sitemap_handler, terms_handler, tracking_page_handler, update_submit_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Admin pages requiring a session cookie.
///
/// Protected via [`crate::web::middleware::web_auth`], which redirects to
/// `/login` instead of returning `401`.
///
/// # Endpoints
///
/// - `GET  /admin`        - Dashboard with counters and shipment table
/// - `GET  /admin/create` - Shipment creation form
/// - `POST /admin/create` - Create shipment
/// - `POST /admin/update` - Update shipment status
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard_handler))
        .route(
            "/admin/create",
            get(create_page_handler).post(create_submit_handler),
        )
        .route("/admin/update", post(update_submit_handler))
}

/// Public marketing and tracking pages.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/services", get(services_handler))
        .route("/faq", get(faq_handler))
        .route("/contact", get(contact_handler))
        .route("/shipping", get(shipping_handler))
        .route("/refunds", get(refunds_handler))
        .route("/privacy", get(privacy_handler))
        .route("/terms", get(terms_handler))
        .route("/cookies", get(cookies_handler))
        .route("/tracking", get(tracking_page_handler))
        .route("/login", get(login_page_handler))
        .route("/logout", get(logout_handler))
        .route("/sitemap.xml", get(sitemap_handler))
}

/// Login form submission, under the strict rate limit.
pub fn sensitive_routes() -> Router<AppState> {
    Router::new().route("/login", post(login_submit_handler))
}
