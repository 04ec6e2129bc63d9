//! Message sender port trait

use async_trait::async_trait;

use crate::error::TelegramError;

/// Chat delivery
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver an already formatted MarkdownV2 message
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError>;
}
