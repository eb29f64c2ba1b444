use reqwest::Client;
use serde::Serialize;

use crate::error::{DigestError, Result};

const ORIGIN: &str = "Discord webhook";

#[derive(Clone)]
pub struct DiscordNotifier {
    webhook: String,
    client: Client,
}

impl DiscordNotifier {
    pub fn new(client: Client, webhook: impl Into<String>) -> Self {
        Self {
            webhook: webhook.into(),
            client,
        }
    }

    /// Post `content` as a plain webhook message. One attempt, no retry.
    pub async fn deliver(&self, content: &str) -> Result<()> {
        let payload = DiscordWebhookPayload { content };

        let rsp = self
            .client
            .post(&self.webhook)
            .json(&payload)
            .send()
            .await
            .map_err(DigestError::http(ORIGIN))?;

        let status = rsp.status();
        if !status.is_success() {
            let body = rsp.text().await.unwrap_or_default();
            return Err(DigestError::Delivery { status, body });
        }

        tracing::debug!(%status, chars = content.chars().count(), "digest delivered");
        Ok(())
    }
}

#[derive(Serialize)]
struct DiscordWebhookPayload<'a> {
    content: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_plain_content_object() {
        let v = serde_json::to_value(DiscordWebhookPayload { content: "hi\nthere" }).unwrap();
        assert_eq!(v, serde_json::json!({ "content": "hi\nthere" }));
    }
}
