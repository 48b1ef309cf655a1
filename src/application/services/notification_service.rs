//! Best-effort status notifications.
//!
//! Request handlers call [`NotificationService::submit`], which never blocks.
//! A single background task ([`run_notification_worker`]) drains the channel
//! and hands each notification to a [`NotificationDispatcher`]. Delivery
//! failures are logged and dropped.

use std::sync::Arc;

use askama::Template;
use tokio::sync::mpsc::{self, error::TrySendError};
use url::Url;

use crate::domain::notification::StatusNotification;
use crate::infrastructure::messaging::{EmailMessage, EmailSender, SmsSender};
use crate::utils::status;

/// Handle used by request handlers to queue notifications.
#[derive(Clone)]
pub struct NotificationService {
    sender: mpsc::Sender<StatusNotification>,
}

impl NotificationService {
    pub fn new(sender: mpsc::Sender<StatusNotification>) -> Self {
        Self { sender }
    }

    /// Creates a service together with the receiving end for the worker.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<StatusNotification>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    /// Queues a notification without waiting.
    ///
    /// Returns `false` when the notification was dropped because the queue
    /// is full or the worker has stopped.
    pub fn submit(&self, notification: StatusNotification) -> bool {
        match self.sender.try_send(notification) {
            Ok(()) => true,
            Err(TrySendError::Full(n)) => {
                tracing::warn!(
                    tracking_number = %n.tracking_number,
                    "Notification queue full, dropping status notification"
                );
                false
            }
            Err(TrySendError::Closed(n)) => {
                tracing::error!(
                    tracking_number = %n.tracking_number,
                    "Notification worker stopped, dropping status notification"
                );
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Free slots currently available in the queue.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }

    pub fn max_capacity(&self) -> usize {
        self.sender.max_capacity()
    }
}

#[derive(Template)]
#[template(path = "email/status_update.html")]
struct StatusUpdateEmail<'a> {
    tracking_number: &'a str,
    status: &'a str,
    location: &'a str,
    description: &'a str,
    tracking_link: &'a str,
}

/// Counts of what a single dispatch delivered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub emails_sent: usize,
    pub sms_sent: usize,
    pub failures: usize,
}

/// Composes and sends the email/SMS messages for one status change.
pub struct NotificationDispatcher {
    email: Arc<dyn EmailSender>,
    sms: Arc<dyn SmsSender>,
    app_url: Url,
    sms_enabled: bool,
}

impl NotificationDispatcher {
    pub fn new(
        email: Arc<dyn EmailSender>,
        sms: Arc<dyn SmsSender>,
        app_url: Url,
        sms_enabled: bool,
    ) -> Self {
        Self {
            email,
            sms,
            app_url,
            sms_enabled,
        }
    }

    /// Public tracking page URL for `tracking_number`, query-encoded.
    pub fn tracking_link(&self, tracking_number: &str) -> String {
        let mut url = self.app_url.clone();
        let path = format!("{}/tracking", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url.query_pairs_mut()
            .clear()
            .append_pair("id", tracking_number);
        url.to_string()
    }

    pub fn subject(tracking_number: &str) -> String {
        format!("Shipment Update: {tracking_number}")
    }

    pub fn sms_body(notification: &StatusNotification, link: &str) -> String {
        format!(
            "FastRocket Update: Shipment {} is now {} at {}. {}. Track here: {}",
            notification.tracking_number,
            status::display(&notification.status),
            notification.location,
            notification.description,
            link
        )
    }

    fn render_email(
        notification: &StatusNotification,
        link: &str,
    ) -> Result<String, askama::Error> {
        let status = status::display(&notification.status);
        StatusUpdateEmail {
            tracking_number: &notification.tracking_number,
            status: &status,
            location: &notification.location,
            description: &notification.description,
            tracking_link: link,
        }
        .render()
    }

    /// Sends the notification to the sender and the receiver.
    ///
    /// Emails go to every party with an address. SMS goes to every party
    /// with a phone number, only when SMS notifications are enabled.
    pub async fn dispatch(&self, notification: &StatusNotification) -> DispatchReport {
        let mut report = DispatchReport::default();
        let tracking_number = notification.tracking_number.as_str();
        let link = self.tracking_link(tracking_number);

        let html = match Self::render_email(notification, &link) {
            Ok(html) => Some(html),
            Err(e) => {
                tracing::error!(error = %e, tracking_number, "Failed to render notification email");
                report.failures += 1;
                None
            }
        };
        let subject = Self::subject(tracking_number);
        let sms_body = Self::sms_body(notification, &link);

        for recipient in notification.recipients() {
            if let (Some(to), Some(html)) = (&recipient.email, &html) {
                let message = EmailMessage {
                    to: to.clone(),
                    subject: subject.clone(),
                    html: html.clone(),
                };
                match self.email.send_email(message).await {
                    Ok(id) => {
                        tracing::info!(tracking_number, to = %to, message_id = ?id, "Email notification sent");
                        report.emails_sent += 1;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, tracking_number, to = %to, "Email notification failed");
                        report.failures += 1;
                    }
                }
            }

            if !self.sms_enabled {
                continue;
            }
            if let Some(phone) = &recipient.phone {
                match self.sms.send_sms(phone, &sms_body).await {
                    Ok(id) => {
                        tracing::info!(tracking_number, message_id = ?id, "SMS notification sent");
                        report.sms_sent += 1;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, tracking_number, "SMS notification failed");
                        report.failures += 1;
                    }
                }
            }
        }

        report
    }

    pub fn email_enabled(&self) -> bool {
        self.email.is_enabled()
    }
}

/// Drains the notification queue until every [`NotificationService`] handle
/// is dropped.
pub async fn run_notification_worker(
    mut rx: mpsc::Receiver<StatusNotification>,
    dispatcher: Arc<NotificationDispatcher>,
) {
    tracing::info!("Notification worker started");

    while let Some(notification) = rx.recv().await {
        let report = dispatcher.dispatch(&notification).await;
        tracing::debug!(
            tracking_number = %notification.tracking_number,
            emails_sent = report.emails_sent,
            sms_sent = report.sms_sent,
            failures = report.failures,
            "Status notification processed"
        );
    }

    tracing::info!("Notification worker stopped");
}
