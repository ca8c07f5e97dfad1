//! Error types for the bot application.

use dice_storage::StorageError;
use thiserror::Error;

/// Top-level error for the bot (transport, storage).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
