//! Mock implementation of [`dice_bot::Bot`] for integration tests.
//!
//! Records every sent message on an unbounded channel so tests can assert on the reply text and
//! parse mode without hitting Telegram.

use std::sync::Arc;

use async_trait::async_trait;
use dice_bot::{Bot, BotError, Chat, Result};
use tokio::sync::mpsc;

/// One recorded send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub markdown: bool,
}

pub struct MockBot {
    sent_tx: mpsc::UnboundedSender<SentMessage>,
    fail: bool,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for sent messages.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SentMessage>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx, fail: false }), sent_rx)
    }

    /// A MockBot whose sends all fail; nothing is recorded.
    pub fn failing() -> (Arc<Self>, mpsc::UnboundedReceiver<SentMessage>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx, fail: true }), sent_rx)
    }

    fn record(&self, chat: &Chat, text: &str, markdown: bool) -> Result<()> {
        if self.fail {
            return Err(BotError::Bot("network unreachable".to_string()));
        }
        let _ = self.sent_tx.send(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            markdown,
        });
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, text, false)
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, text, true)
    }
}
