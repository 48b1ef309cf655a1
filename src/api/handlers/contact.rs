//! Handler for the contact form.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a contact form submission.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// The reCAPTCHA token is verified first. Accepted messages are only logged;
/// nothing is stored.
///
/// # Errors
///
/// - 400 on invalid fields or a rejected reCAPTCHA token
/// - 500 if reCAPTCHA is not configured
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .captcha_service
        .verify(&payload.recaptcha_token)
        .await?;

    if !outcome.is_passed() {
        return Err(AppError::bad_request(
            "reCAPTCHA verification failed",
            json!({ "score": outcome.score() }),
        ));
    }

    tracing::info!(
        name = %payload.name,
        email = %payload.email,
        phone = ?payload.phone,
        subject = ?payload.subject,
        message_len = payload.message.len(),
        "Contact form submitted"
    );

    Ok(Json(ContactResponse {
        success: true,
        message: "Thank you for your message. We'll get back to you soon!".to_string(),
    }))
}
