//! DTOs for admin authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::AdminUser;

/// Request body for `POST /api/auth/login` and the login form.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body for `GET /api/auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: AdminUser,
}

/// Request body for `POST /api/register`.
///
/// Registration is disabled; only the email is inspected.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<RegisteredUser>,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}
