//! No-op sender used when a messaging provider is not configured.

use super::service::{EmailMessage, EmailSender, MessagingResult, SmsSender};
use async_trait::async_trait;
use tracing::{debug, warn};

/// A sender that drops every message.
///
/// Used when `RESEND_API_KEY` or the Twilio credentials are missing. Each
/// dropped message is logged so the skip is visible.
pub struct NullSender;

impl NullSender {
    /// Creates a new NullSender instance.
    pub fn new() -> Self {
        debug!("Using NullSender (provider not configured)");
        Self
    }
}

impl Default for NullSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for NullSender {
    async fn send_email(&self, message: EmailMessage) -> MessagingResult<Option<String>> {
        warn!(to = %message.to, "RESEND_API_KEY is not set, email notification skipped");
        Ok(None)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[async_trait]
impl SmsSender for NullSender {
    async fn send_sms(&self, to: &str, _body: &str) -> MessagingResult<Option<String>> {
        warn!(to, "Twilio credentials are not set, SMS notification skipped");
        Ok(None)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
