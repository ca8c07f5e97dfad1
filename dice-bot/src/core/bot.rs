//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; `TelegramBotAdapter` implements it via teloxide and tests use a
//! recording mock.

use async_trait::async_trait;

use super::error::Result;
use super::types::Chat;

#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message with Markdown parse mode (`**total**` highlighting).
    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()>;
}
