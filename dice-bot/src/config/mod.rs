//! Bot configuration: BaseConfig (Telegram + log) + StorageConfig (statistics, allow-list).

mod base;
mod bot_config;
mod storage;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use storage::{StatsStoreType, StorageConfig};
