//! Postmark email delivery.

use async_trait::async_trait;
use eyre::Result;
use serde_json::json;
use tracing::info;

use crate::EmailSender;

const DEFAULT_API_URL: &str = "https://api.postmarkapp.com/email";

pub struct PostmarkClient {
    http: reqwest::Client,
    api_url: String,
    server_token: String,
    sender: String,
}

impl PostmarkClient {
    pub fn new(http: reqwest::Client, server_token: String, sender: String) -> Self {
        Self {
            http,
            api_url: DEFAULT_API_URL.to_string(),
            server_token,
            sender,
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }
}

#[async_trait]
impl EmailSender for PostmarkClient {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let payload = json!({
            "From": self.sender,
            "To": to,
            "Subject": subject,
            "TextBody": body,
        });

        self.http
            .post(&self.api_url)
            .header("X-Postmark-Server-Token", &self.server_token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        // Fire-and-log: no delivery confirmation is tracked.
        info!("Email sent to {}", to);
        Ok(())
    }
}
