// src/deliver.rs
// Delivery collaborator: one bounded text -> one Telegram message.
// Delivery failures are fatal to the run and are not retried.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

const DELIVER_TIMEOUT_SECS: u64 = 30;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, text: &str) -> Result<()>;
    fn name(&self) -> &'static str;
}

#[derive(Clone)]
pub struct TelegramNotifier {
    token: String,
    chat_id: String,
    client: Client,
    timeout: Duration,
}

#[derive(Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    disable_web_page_preview: bool,
    parse_mode: &'a str,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: String) -> Self {
        Self {
            token,
            chat_id,
            client: Client::new(),
            timeout: Duration::from_secs(DELIVER_TIMEOUT_SECS),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, text: &str) -> Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
        let payload = SendMessagePayload {
            chat_id: &self.chat_id,
            text,
            disable_web_page_preview: true,
            parse_mode: "HTML",
        };

        let rsp = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .context("telegram sendMessage request failed")?;

        rsp.error_for_status_ref()
            .map_err(|e| anyhow!("telegram sendMessage HTTP error: {e}"))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_payload_matches_the_bot_api_contract() {
        let payload = SendMessagePayload {
            chat_id: "42",
            text: "boletim",
            disable_web_page_preview: true,
            parse_mode: "HTML",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["chat_id"], "42");
        assert_eq!(json["text"], "boletim");
        assert_eq!(json["disable_web_page_preview"], true);
        assert_eq!(json["parse_mode"], "HTML");
    }
}
