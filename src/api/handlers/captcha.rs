//! Handler for reCAPTCHA token verification.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::captcha::{VerifyCaptchaRequest, VerifyCaptchaResponse};
use crate::application::services::CaptchaOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Verifies a reCAPTCHA v3 token and applies the score threshold.
///
/// # Endpoint
///
/// `POST /api/verify-recaptcha`
///
/// # Response Codes
///
/// - **200 OK**: `{"success": true, "score": 0.9}`
/// - **400 Bad Request**: `{"success": false, "message": "Token is missing"}` or
///   `{"success": false, "message": "reCAPTCHA verification failed", "score": 0.1}`
/// - **500 Internal Server Error**: not configured or provider unreachable
pub async fn verify_captcha_handler(
    State(state): State<AppState>,
    Json(payload): Json<VerifyCaptchaRequest>,
) -> Result<(StatusCode, Json<VerifyCaptchaResponse>), AppError> {
    let outcome = match state.captcha_service.verify(&payload.token).await {
        Ok(outcome) => outcome,
        Err(e @ AppError::Validation { .. }) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(VerifyCaptchaResponse {
                    success: false,
                    message: Some(e.to_error_info().message),
                    score: None,
                }),
            ));
        }
        Err(e) => return Err(e),
    };

    let response = match outcome {
        CaptchaOutcome::Passed { score } => (
            StatusCode::OK,
            Json(VerifyCaptchaResponse {
                success: true,
                message: None,
                score: Some(score),
            }),
        ),
        CaptchaOutcome::Rejected { score } => (
            StatusCode::BAD_REQUEST,
            Json(VerifyCaptchaResponse {
                success: false,
                message: Some("reCAPTCHA verification failed".to_string()),
                score,
            }),
        ),
    };

    Ok(response)
}
