//! Bot verification through a CAPTCHA provider.
//!
//! [`CaptchaVerifier`] is the provider seam; [`RecaptchaVerifier`] talks to
//! Google reCAPTCHA v3. Score thresholding lives in
//! [`crate::application::services::CaptchaService`].

mod recaptcha;

pub use recaptcha::{CaptchaError, CaptchaVerdict, CaptchaVerifier, RecaptchaVerifier};

#[cfg(test)]
pub use recaptcha::MockCaptchaVerifier;
