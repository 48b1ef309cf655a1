//! Google reCAPTCHA v3 token verification.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Errors returned while talking to the verification endpoint.
#[derive(Debug, Error)]
pub enum CaptchaError {
    #[error("verification request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Provider verdict for one token, before score thresholding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CaptchaVerdict {
    pub success: bool,
    /// Risk score in `0.0..=1.0`; absent for invalid tokens.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}

/// Verifies CAPTCHA tokens with an external provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<CaptchaVerdict, CaptchaError>;
}

/// reCAPTCHA `siteverify` client.
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    secret_key: String,
}

impl RecaptchaVerifier {
    pub fn new(client: reqwest::Client, secret_key: String) -> Self {
        Self { client, secret_key }
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> Result<CaptchaVerdict, CaptchaError> {
        let verdict = self
            .client
            .post(SITEVERIFY_URL)
            .form(&[("secret", self.secret_key.as_str()), ("response", token)])
            .send()
            .await?
            .json::<CaptchaVerdict>()
            .await?;

        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_deserialize_success() {
        let verdict: CaptchaVerdict = serde_json::from_str(
            r#"{"success": true, "score": 0.9, "action": "contact_form",
                "challenge_ts": "2025-01-01T00:00:00Z", "hostname": "localhost"}"#,
        )
        .unwrap();

        assert!(verdict.success);
        assert_eq!(verdict.score, Some(0.9));
        assert_eq!(verdict.action.as_deref(), Some("contact_form"));
        assert!(verdict.error_codes.is_empty());
    }

    #[test]
    fn test_verdict_deserialize_failure() {
        let verdict: CaptchaVerdict =
            serde_json::from_str(r#"{"success": false, "error-codes": ["invalid-input-response"]}"#)
                .unwrap();

        assert!(!verdict.success);
        assert!(verdict.score.is_none());
        assert_eq!(verdict.error_codes, vec!["invalid-input-response"]);
    }
}
