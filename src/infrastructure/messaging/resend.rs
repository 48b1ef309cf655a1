//! Resend transactional email sender.

use super::service::{EmailMessage, EmailSender, MessagingError, MessagingResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Email sender backed by the Resend HTTP API.
pub struct ResendEmailSender {
    client: reqwest::Client,
    api_key: String,
    from: String,
}

impl ResendEmailSender {
    /// Creates a sender using `api_key` and the `from` mailbox
    /// (e.g. `FastRocket Delivery <notifications@resend.dev>`).
    pub fn new(client: reqwest::Client, api_key: String, from: String) -> Self {
        Self {
            client,
            api_key,
            from,
        }
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send_email(&self, message: EmailMessage) -> MessagingResult<Option<String>> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest {
                from: &self.from,
                to: [&message.to],
                subject: &message.subject,
                html: &message.html,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MessagingError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let sent: SendEmailResponse = response.json().await?;
        info!(to = %message.to, id = ?sent.id, "Email sent");

        Ok(sent.id)
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
