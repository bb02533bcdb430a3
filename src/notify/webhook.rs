//! Webhook通知
//!
//! 設定されたURLへJSONペイロードをPOSTする

use super::{AlertSender, NotifyError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Webhook送信機
pub struct WebhookSender {
    client: Client,
    url: String,
}

impl WebhookSender {
    /// 新しい送信機を作成
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl AlertSender for WebhookSender {
    async fn send(&self, subject: &str, message: &str) -> Result<(), NotifyError> {
        let payload = json!({
            "subject": subject,
            "message": message,
        });

        let response = self.client.post(&self.url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::SendFailed(format!(
                "webhook returned HTTP {}",
                status
            )));
        }

        Ok(())
    }
}
