use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::MessagingProvider;
use crate::errors::BotError;
use crate::models::message::{ApiResponse, Update};
use crate::models::InboundMessage;

pub struct TelegramProvider {
    base_url: String,
    client: reqwest::Client,
    next_offset: AtomicI64,
}

impl TelegramProvider {
    pub fn new(api_url: &str, token: &str) -> Self {
        Self {
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
            client: reqwest::Client::new(),
            next_offset: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl MessagingProvider for TelegramProvider {
    async fn get_updates(&self, timeout_secs: u64) -> anyhow::Result<Vec<InboundMessage>> {
        let offset = self.next_offset.load(Ordering::SeqCst);
        let url = format!("{}/getUpdates", self.base_url);

        let resp: ApiResponse<Vec<Update>> = self
            .client
            .get(&url)
            .query(&[("offset", offset), ("timeout", timeout_secs as i64)])
            // Leave room for the server to hold the long poll open.
            .timeout(Duration::from_secs(timeout_secs + 10))
            .send()
            .await
            .context("failed to call getUpdates")?
            .json()
            .await
            .context("failed to parse getUpdates response")?;

        if !resp.ok {
            anyhow::bail!(
                "getUpdates rejected: {}",
                resp.description.unwrap_or_default()
            );
        }

        let updates = resp.result.unwrap_or_default();
        if let Some(last) = updates.iter().map(|u| u.update_id).max() {
            self.next_offset.store(last + 1, Ordering::SeqCst);
        }

        Ok(updates.into_iter().filter_map(Update::into_inbound).collect())
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
        let url = format!("{}/sendMessage", self.base_url);

        self.client
            .post(&url)
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .context("failed to call sendMessage")
            .and_then(|resp| {
                resp.error_for_status()
                    .context("Telegram API returned error")
            })
            .map_err(BotError::Send)?;

        Ok(())
    }
}
