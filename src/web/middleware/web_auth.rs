//! Cookie-based authentication for the admin pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;
use crate::utils::cookies::{SESSION_COOKIE, read_cookie};

/// Authenticates admin page requests using the `auth_token` cookie.
///
/// On success the [`crate::application::services::AdminUser`] is inserted
/// into request extensions. A missing, expired or tampered cookie
/// redirects to `/login` instead of returning `401`.
///
/// # Example
///
/// ```rust,ignore
/// let admin = Router::new()
///     .route("/admin", get(dashboard_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let user = read_cookie(req.headers(), SESSION_COOKIE)
        .and_then(|token| st.auth_service.authenticate(&token).ok())
        .ok_or_else(|| Redirect::to("/login"))?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
