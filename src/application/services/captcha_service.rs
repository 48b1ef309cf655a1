//! reCAPTCHA score thresholding.

use std::sync::Arc;

use serde_json::json;

use crate::error::AppError;
use crate::infrastructure::captcha::{CaptchaVerdict, CaptchaVerifier};

/// Default minimum score for a human.
pub const DEFAULT_MIN_SCORE: f64 = 0.5;

/// Result of checking one token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptchaOutcome {
    Passed { score: f64 },
    Rejected { score: Option<f64> },
}

impl CaptchaOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Passed { score } => Some(*score),
            Self::Rejected { score } => *score,
        }
    }
}

pub struct CaptchaService {
    verifier: Option<Arc<dyn CaptchaVerifier>>,
    min_score: f64,
}

impl CaptchaService {
    /// `verifier` is `None` when no secret key is configured.
    pub fn new(verifier: Option<Arc<dyn CaptchaVerifier>>, min_score: f64) -> Self {
        Self {
            verifier,
            min_score,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.verifier.is_some()
    }

    /// A verdict passes only when the provider reports success and the
    /// score reaches `min_score`. A missing score never passes.
    pub fn evaluate(verdict: &CaptchaVerdict, min_score: f64) -> CaptchaOutcome {
        match verdict.score {
            Some(score) if verdict.success && score >= min_score => {
                CaptchaOutcome::Passed { score }
            }
            score => CaptchaOutcome::Rejected { score },
        }
    }

    /// Verifies `token` with the provider and applies the score threshold.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the token is empty
    /// - [`AppError::Internal`] if verification is not configured or the
    ///   provider cannot be reached
    pub async fn verify(&self, token: &str) -> Result<CaptchaOutcome, AppError> {
        if token.trim().is_empty() {
            return Err(AppError::bad_request(
                "Token is missing",
                json!({ "fields": ["token"] }),
            ));
        }

        let Some(verifier) = &self.verifier else {
            tracing::error!("RECAPTCHA_SECRET_KEY is not set");
            return Err(AppError::internal("reCAPTCHA not configured", json!({})));
        };

        let verdict = verifier.verify(token).await.map_err(|e| {
            tracing::error!(error = %e, "reCAPTCHA verification request failed");
            AppError::internal("Internal server error", json!({}))
        })?;

        let outcome = Self::evaluate(&verdict, self.min_score);
        if !outcome.is_passed() {
            tracing::info!(
                success = verdict.success,
                score = ?verdict.score,
                error_codes = ?verdict.error_codes,
                "reCAPTCHA rejected"
            );
        }

        Ok(outcome)
    }
}
