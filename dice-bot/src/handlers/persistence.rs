//! Saves the statistics snapshot after every reply and picks up clears made by the admin CLI.

use std::sync::Arc;

use async_trait::async_trait;
use dice_storage::SnapshotStore;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::components::SharedDispatcher;
use crate::core::{Handler, HandlerResponse, Message, Result};

/// Writes the whole snapshot to the store in after() when the chain produced a reply. Save
/// failures are logged; the chain carries on.
///
/// before() compares the stored clear generation with the in-memory one. A newer stored
/// generation means `stats clear` ran while the bot was up, and the in-memory statistics are
/// dropped before the message is handled.
pub struct StatsPersistenceHandler {
    dispatcher: SharedDispatcher,
    store: Arc<dyn SnapshotStore>,
    // Snapshot and write happen under one lock so saves land in order.
    save_lock: Mutex<()>,
}

impl StatsPersistenceHandler {
    pub fn new(dispatcher: SharedDispatcher, store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            dispatcher,
            store,
            save_lock: Mutex::new(()),
        }
    }

    /// Snapshots the current statistics and writes them to the store.
    pub async fn save(&self) -> Result<()> {
        let _guard = self.save_lock.lock().await;
        let snapshot = self.dispatcher.lock().await.stats().snapshot();
        self.store.save(&snapshot).await?;
        debug!(chats = snapshot.chats.len(), "Statistics saved");
        Ok(())
    }

    /// Drops the in-memory statistics when the store holds a newer clear generation.
    pub async fn sync_external_clear(&self) -> Result<bool> {
        let _guard = self.save_lock.lock().await;
        let Some(stored) = self.store.generation().await? else {
            return Ok(false);
        };
        let cleared = self.dispatcher.lock().await.stats_mut().sync_generation(stored);
        if cleared {
            info!(generation = stored, "Statistics were cleared externally");
        }
        Ok(cleared)
    }
}

#[async_trait]
impl Handler for StatsPersistenceHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        if let Err(e) = self.sync_external_clear().await {
            warn!(error = %e, chat_id = message.chat.id, "Failed to check for cleared statistics");
        }
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        if let HandlerResponse::Reply(_) = response {
            if let Err(e) = self.save().await {
                error!(error = %e, chat_id = message.chat.id, "Failed to save statistics");
            }
        }
        Ok(())
    }
}
