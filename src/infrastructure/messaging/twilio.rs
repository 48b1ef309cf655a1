//! Twilio SMS sender.

use super::service::{MessagingError, MessagingResult, SmsSender};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

#[derive(Deserialize)]
struct MessageResponse {
    sid: Option<String>,
}

/// SMS sender backed by the Twilio Messages API.
pub struct TwilioSmsSender {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioSmsSender {
    /// Creates a sender for the given account, sending from `from_number`.
    pub fn new(
        client: reqwest::Client,
        account_sid: String,
        auth_token: String,
        from_number: String,
    ) -> Self {
        Self {
            client,
            account_sid,
            auth_token,
            from_number,
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/Accounts/{}/Messages.json", TWILIO_API_BASE, self.account_sid)
    }
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send_sms(&self, to: &str, body: &str) -> MessagingResult<Option<String>> {
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", self.from_number.as_str()), ("Body", body)])
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

        let message: MessageResponse = response.json().await?;
        info!(to, sid = ?message.sid, "SMS sent");

        Ok(message.sid)
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
