//! DTOs for the reCAPTCHA verification endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct VerifyCaptchaRequest {
    #[serde(default)]
    pub token: String,
}

/// Response body for `POST /api/verify-recaptcha`, on success and rejection.
#[derive(Debug, Serialize)]
pub struct VerifyCaptchaResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub score: Option<f64>,
}
