//! Messaging traits and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while handing a message to a provider.
#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Result type for messaging operations.
pub type MessagingResult<T> = Result<T, MessagingError>;

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Sends transactional email.
///
/// Implementations report failures to the caller; the notification worker
/// decides to log and drop them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one email, returning the provider's message id when known.
    async fn send_email(&self, message: EmailMessage) -> MessagingResult<Option<String>>;

    /// Whether this sender actually delivers anything.
    fn is_enabled(&self) -> bool;
}

/// Sends SMS text messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Sends one SMS, returning the provider's message id when known.
    async fn send_sms(&self, to: &str, body: &str) -> MessagingResult<Option<String>>;

    /// Whether this sender actually delivers anything.
    fn is_enabled(&self) -> bool;
}
