//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces consumed by the application layer,
//! providing concrete implementations for persistence and third-party APIs.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`messaging`] - Email (Resend) and SMS (Twilio) senders, plus a no-op sender
//! - [`captcha`] - reCAPTCHA token verification

pub mod captcha;
pub mod messaging;
pub mod persistence;
