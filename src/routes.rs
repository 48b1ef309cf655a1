//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check: DB, notification queue, mail provider
//! - `/api/*`        - JSON API (admin routes need a session)
//! - `/admin/*`      - Admin pages (cookie session required)
//! - `/*`            - Marketing pages, tracking, login, sitemap
//! - `/static/*`     - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, strict on login/contact/CAPTCHA
//! - **Authentication** - Bearer token or cookie (API), cookie with redirect (web)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(compose(state, Some(behind_proxy)))
}

/// Same routes and authentication as [`app_router`] without rate limiting
/// or path normalization.
///
/// The per-IP limiter needs the peer address from connect info, which
/// in-process test servers do not provide.
pub fn unlimited_router(state: AppState) -> Router {
    compose(state, None)
}

fn compose(state: AppState, rate_limits: Option<bool>) -> Router {
    let limit = |router: Router<AppState>, profile: RateLimit| match rate_limits {
        Some(behind_proxy) => rate_limit::apply(router, profile, behind_proxy),
        None => router,
    };

    let api_protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = Router::new()
        .merge(limit(api_protected, RateLimit::Standard))
        .merge(limit(api::routes::public_routes(), RateLimit::Standard))
        .merge(limit(api::routes::sensitive_routes(), RateLimit::Strict));

    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), web_auth::layer),
    );

    let web_router = Router::new()
        .merge(limit(web_protected, RateLimit::Standard))
        .merge(limit(web::routes::public_routes(), RateLimit::Standard))
        .merge(limit(web::routes::sensitive_routes(), RateLimit::Strict));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web_router)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}
