//! Twilio SMS delivery.

use async_trait::async_trait;
use eyre::Result;
use tracing::info;

use crate::SmsSender;

pub struct TwilioClient {
    http: reqwest::Client,
    api_url: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioClient {
    pub fn new(
        http: reqwest::Client,
        account_sid: String,
        auth_token: String,
        from_number: String,
    ) -> Self {
        let api_url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{account_sid}/Messages.json"
        );
        Self {
            http,
            api_url,
            account_sid,
            auth_token,
            from_number,
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }
}

#[async_trait]
impl SmsSender for TwilioClient {
    async fn send_sms(&self, to: &str, body: &str) -> Result<()> {
        let form = [
            ("To", to),
            ("From", self.from_number.as_str()),
            ("Body", body),
        ];

        self.http
            .post(&self.api_url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await?
            .error_for_status()?;

        // Fire-and-log: no delivery confirmation is tracked.
        info!("SMS sent to {}", to);
        Ok(())
    }
}
