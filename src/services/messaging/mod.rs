pub mod telegram;

use async_trait::async_trait;

use crate::errors::BotError;
use crate::models::InboundMessage;

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Long-polls for new messages, blocking up to `timeout_secs`.
    async fn get_updates(&self, timeout_secs: u64) -> anyhow::Result<Vec<InboundMessage>>;

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError>;
}
