//! Session cookie helpers.

use axum::http::{HeaderMap, header::COOKIE};

/// Name of the cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "auth_token";

/// Reads a cookie value from the `Cookie` header.
///
/// Handles multiple cookies in one header (`a=1; auth_token=xyz`).
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}

/// Builds a `Set-Cookie` value for the session token.
pub fn session_cookie(token: &str, max_age_seconds: i64, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
        SESSION_COOKIE, token, max_age_seconds, secure
    )
}

/// Builds a `Set-Cookie` value that removes the session token.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}
