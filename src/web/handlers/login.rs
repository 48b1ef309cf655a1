//! Login and logout pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, header::SET_COOKIE};
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};

use crate::api::dto::auth::LoginRequest;
use crate::api::handlers::auth::session_cookie;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookies::{self, SESSION_COOKIE, read_cookie};

/// Template for the login page.
///
/// Renders `templates/login.html` with the email prefilled after a failed
/// attempt.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    email: String,
    error: Option<String>,
}

/// Renders the login page, or redirects to `/admin` when already signed in.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let signed_in = read_cookie(&headers, SESSION_COOKIE)
        .is_some_and(|token| state.auth_service.authenticate(&token).is_ok());

    if signed_in {
        return Redirect::to("/admin").into_response();
    }

    LoginTemplate {
        email: String::new(),
        error: None,
    }
    .into_response()
}

/// Handles the login form.
///
/// # Endpoint
///
/// `POST /login`
///
/// On success sets the `auth_token` cookie and redirects to `/admin`.
/// Otherwise re-renders the form with the error message.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginRequest>,
) -> Response {
    match state.auth_service.login(&form.email, &form.password).await {
        Ok(session) => {
            let cookie = session_cookie(&state, &session);
            (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/admin")).into_response()
        }
        Err(e) => {
            let status = e.status_code();
            let message = match e {
                AppError::Unauthorized { .. } => "Invalid email or password".to_string(),
                other => other.to_error_info().message,
            };
            (
                status,
                LoginTemplate {
                    email: form.email,
                    error: Some(message),
                },
            )
                .into_response()
        }
    }
}

/// Clears the session cookie and returns to the home page.
///
/// # Endpoint
///
/// `GET /logout`
pub async fn logout_handler() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, cookies::clear_session_cookie())]),
        Redirect::to("/"),
    )
}
