//! Outbound messaging for shipment notifications.
//!
//! Provides [`EmailSender`] and [`SmsSender`] traits with implementations:
//! - [`ResendEmailSender`] - Resend transactional email API
//! - [`TwilioSmsSender`] - Twilio Programmable Messaging API
//! - [`NullSender`] - No-op implementation used when a provider is not configured

mod null_sender;
mod resend;
mod service;
mod twilio;

pub use null_sender::NullSender;
pub use resend::ResendEmailSender;
pub use service::{EmailMessage, EmailSender, MessagingError, MessagingResult, SmsSender};
pub use twilio::TwilioSmsSender;

#[cfg(test)]
pub use service::{MockEmailSender, MockSmsSender};
