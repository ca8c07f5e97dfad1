//! Stops the chain for chats that are not on the allow-list.

use std::collections::BTreeSet;

use async_trait::async_trait;
use dice_storage::{AllowedChatsFile, FileStamp};
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::core::{Handler, Message, Result};

struct AllowList {
    stamp: Option<FileStamp>,
    chats: BTreeSet<i64>,
}

/// Silently drops messages from unknown chats: no reply, no name update, no statistics.
///
/// The allow-list file is re-read whenever its modification time or size changes, so
/// `chats add` and `chats remove` apply to a running bot.
pub struct ChatAllowListHandler {
    file: AllowedChatsFile,
    state: Mutex<AllowList>,
}

impl ChatAllowListHandler {
    pub fn new(file: AllowedChatsFile) -> Self {
        let stamp = file.stamp();
        let chats = file.load().unwrap_or_else(|e| {
            error!(error = %e, path = %file.path().display(), "Failed to read allow-list");
            BTreeSet::new()
        });
        if chats.is_empty() {
            warn!(
                path = %file.path().display(),
                "Allow-list is empty, the bot will not answer in any chat"
            );
        } else {
            info!(chats = chats.len(), "Allow-list loaded");
        }

        Self {
            file,
            state: Mutex::new(AllowList { stamp, chats }),
        }
    }

    /// Current allow-list, re-read first if the file changed.
    pub async fn allowed_chats(&self) -> BTreeSet<i64> {
        let mut state = self.state.lock().await;
        self.refresh(&mut state);
        state.chats.clone()
    }

    async fn is_allowed(&self, chat_id: i64) -> bool {
        let mut state = self.state.lock().await;
        self.refresh(&mut state);
        state.chats.contains(&chat_id)
    }

    fn refresh(&self, state: &mut AllowList) {
        let stamp = self.file.stamp();
        if stamp == state.stamp {
            return;
        }
        // A failed read keeps the old list and stamp.
        match self.file.load() {
            Ok(chats) => {
                info!(chats = chats.len(), "Allow-list reloaded");
                state.chats = chats;
                state.stamp = stamp;
            }
            Err(e) => error!(
                error = %e,
                path = %self.file.path().display(),
                "Failed to reload allow-list"
            ),
        }
    }
}

#[async_trait]
impl Handler for ChatAllowListHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let chat_id = message.chat.id;
        if self.is_allowed(chat_id).await {
            Ok(true)
        } else {
            debug!(chat_id, "Chat not in allow-list, ignoring message");
            Ok(false)
        }
    }
}
