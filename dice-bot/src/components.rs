//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::{Context, Result};
use dice_engine::{Dispatcher, StatsAggregator};
use dice_storage::{AllowedChatsFile, JsonFileSnapshotStore, SnapshotStore, SqliteSnapshotStore};
use rand::rngs::StdRng;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::{StatsStoreType, StorageConfig};
use crate::core::Bot;
use crate::handlers::{
    ChatAllowListHandler, DiceCommandHandler, LoggingHandler, StatsPersistenceHandler,
};

/// Dispatcher shared by the per-message tasks; the mutex serializes statistics updates.
pub type SharedDispatcher = Arc<Mutex<Dispatcher<StdRng>>>;

/// Everything the handler chain needs; produced by the component factory.
pub struct BotComponents {
    pub dispatcher: SharedDispatcher,
    pub allow_list: Arc<ChatAllowListHandler>,
    pub bot: Arc<dyn Bot>,
    pub persistence: Arc<StatsPersistenceHandler>,
}

/// Opens the snapshot store selected by STATS_STORE_TYPE.
#[instrument(skip(config))]
pub async fn create_snapshot_store(config: &StorageConfig) -> Result<Arc<dyn SnapshotStore>> {
    let store: Arc<dyn SnapshotStore> = match config.store_type {
        StatsStoreType::Json => {
            info!(path = %config.stats_file, "Using JSON statistics store");
            Arc::new(JsonFileSnapshotStore::new(&config.stats_file))
        }
        StatsStoreType::Sqlite => {
            info!(database_url = %config.database_url, "Using SQLite statistics store");
            Arc::new(
                SqliteSnapshotStore::new(&config.database_url)
                    .await
                    .with_context(|| {
                        format!("Failed to open SQLite store at {}", config.database_url)
                    })?,
            )
        }
    };
    Ok(store)
}

/// Restores statistics from the store. A missing, unreadable or incompatible snapshot yields
/// empty statistics.
pub async fn load_stats(store: &dyn SnapshotStore) -> StatsAggregator {
    match store.load().await {
        Ok(Some(snapshot)) => match StatsAggregator::from_snapshot(snapshot) {
            Ok(stats) => {
                info!("Statistics restored");
                stats
            }
            Err(e) => {
                error!(error = %e, "Cannot restore statistics, starting empty");
                StatsAggregator::new()
            }
        },
        Ok(None) => {
            info!("No saved statistics, starting empty");
            StatsAggregator::new()
        }
        Err(e) => {
            error!(error = %e, "Failed to load statistics, starting empty");
            StatsAggregator::new()
        }
    }
}

/// Builds BotComponents: opens the store, restores statistics and reads the allow-list.
#[instrument(skip(config, bot, rng))]
pub async fn build_bot_components(
    config: &StorageConfig,
    bot: Arc<dyn Bot>,
    rng: StdRng,
) -> Result<BotComponents> {
    let store = create_snapshot_store(config).await?;
    let stats = load_stats(store.as_ref()).await;
    let dispatcher: SharedDispatcher = Arc::new(Mutex::new(Dispatcher::with_stats(stats, rng)));
    let allow_list = Arc::new(ChatAllowListHandler::new(AllowedChatsFile::new(
        &config.allowed_chats_file,
    )));
    let persistence = Arc::new(StatsPersistenceHandler::new(dispatcher.clone(), store));

    Ok(BotComponents {
        dispatcher,
        allow_list,
        bot,
        persistence,
    })
}

/// Builds the handler chain (logging → allow-list → persistence → dice commands).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(components.allow_list.clone())
        .add_handler(components.persistence.clone())
        .add_handler(Arc::new(DiceCommandHandler::new(
            components.dispatcher.clone(),
            components.bot.clone(),
        )))
}
