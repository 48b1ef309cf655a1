//! Handlers for admin login, logout, session and registration.

use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse},
};
use validator::Validate;

use crate::api::dto::auth::{
    LoginRequest, LogoutResponse, RegisterRequest, RegisterResponse, RegisteredUser,
    SessionResponse,
};
use crate::application::services::{AdminUser, Session};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookies;

/// Logs the admin in.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiJ9...",
///   "expiresAt": "2025-02-01T12:00:00Z",
///   "user": { "id": "1", "email": "admin@fastrocket.com", "name": "Admin", "role": "admin" }
/// }
/// ```
///
/// The token is also set as the `auth_token` HttpOnly cookie.
///
/// # Errors
///
/// - 400 if email or password is missing
/// - 401 if the credentials are wrong
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let session = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    let cookie = session_cookie(&state, &session);

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(session)))
}

pub(crate) fn session_cookie(state: &AppState, session: &Session) -> String {
    cookies::session_cookie(
        &session.token,
        state.auth_service.session_ttl().num_seconds(),
        state.site.secure_cookies,
    )
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `POST /api/auth/logout`
pub async fn logout_handler() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, cookies::clear_session_cookie())]),
        Json(LogoutResponse { success: true }),
    )
}

/// Returns the admin behind the current session.
///
/// # Endpoint
///
/// `GET /api/auth/session` (requires authentication)
pub async fn session_handler(Extension(user): Extension<AdminUser>) -> Json<SessionResponse> {
    Json(SessionResponse { user })
}

/// Registration is disabled.
///
/// # Endpoint
///
/// `POST /api/register`
///
/// Returns 200 with "Admin account already exists" when the email is the
/// admin's, 403 otherwise. Nothing is ever created.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> (StatusCode, Json<RegisterResponse>) {
    if !state.auth_service.is_admin_email(&payload.email) {
        tracing::info!(email = %payload.email.trim(), "Rejected registration attempt");
        return (
            StatusCode::FORBIDDEN,
            Json(RegisterResponse {
                success: false,
                message: "Registration is disabled. Please contact administrator.".to_string(),
                user: None,
            }),
        );
    }

    (
        StatusCode::OK,
        Json(RegisterResponse {
            success: true,
            message: "Admin account already exists. Please login.".to_string(),
            user: Some(RegisteredUser {
                email: payload.email.trim().to_string(),
                name: payload.name,
            }),
        }),
    )
}
