use anyhow::Context;
use async_trait::async_trait;

use super::MessagingProvider;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

pub struct TwilioSmsProvider {
    account_sid: String,
    auth_token: String,
    from_number: String,
    api_base: String,
    client: reqwest::Client,
}

impl TwilioSmsProvider {
    pub fn new(account_sid: String, auth_token: String, from_number: String) -> Self {
        Self {
            account_sid,
            auth_token,
            from_number,
            api_base: TWILIO_API_BASE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point at a different API host (local stub server in tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.api_base.trim_end_matches('/'),
            self.account_sid
        )
    }
}

#[async_trait]
impl MessagingProvider for TwilioSmsProvider {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()> {
        self.client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", &self.from_number), ("Body", body)])
            .send()
            .await
            .context("failed to send Twilio SMS")?
            .error_for_status()
            .context("Twilio API returned error")?;

        tracing::debug!(to = %to, "owner SMS sent");
        Ok(())
    }
}
