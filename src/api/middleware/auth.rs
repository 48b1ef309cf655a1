//! Admin session authentication middleware for the JSON API.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::utils::cookies::{SESSION_COOKIE, read_cookie};
use crate::{error::AppError, state::AppState};

/// Authenticates requests with an admin session token.
///
/// # Token Sources
///
/// ```text
/// Authorization: Bearer <token>
/// Cookie: auth_token=<token>
/// ```
///
/// The header wins when both are present. On success the
/// [`AdminUser`](crate::application::services::AdminUser) is inserted into
/// request extensions for handlers to extract.
///
/// # Errors
///
/// Returns `401 Unauthorized` if no token is supplied or the token is
/// malformed, expired or signed with another secret.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/shipments/list", get(list_shipments_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => Some(token),
        Err(_) => read_cookie(&parts.headers, SESSION_COOKIE),
    };

    let token = token.ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Session token is missing"}),
        )
    })?;

    let user = st.auth_service.authenticate(&token)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
