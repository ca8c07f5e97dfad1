//! Storage config: where statistics and the chat allow-list live. Loaded from env.
//!
//! Needs no token, so admin commands load it on its own.

use anyhow::Result;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Backend for the statistics snapshot (STATS_STORE_TYPE).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsStoreType {
    Json,
    Sqlite,
}

impl FromStr for StatsStoreType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "sqlite" => Ok(Self::Sqlite),
            other => anyhow::bail!("Unknown STATS_STORE_TYPE: {} (expected json or sqlite)", other),
        }
    }
}

impl fmt::Display for StatsStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// STATS_STORE_TYPE
    pub store_type: StatsStoreType,
    /// STATS_FILE, used by the json store
    pub stats_file: String,
    /// DATABASE_URL, SQLite file path used by the sqlite store
    pub database_url: String,
    /// ALLOWED_CHATS_FILE
    pub allowed_chats_file: String,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self> {
        let store_type = match env::var("STATS_STORE_TYPE") {
            Ok(value) => value.parse()?,
            Err(_) => StatsStoreType::Json,
        };
        let stats_file = env::var("STATS_FILE").unwrap_or_else(|_| "stats.json".to_string());
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "dice_bot.db".to_string());
        let allowed_chats_file =
            env::var("ALLOWED_CHATS_FILE").unwrap_or_else(|_| "allowed_chats.txt".to_string());

        Ok(Self {
            store_type,
            stats_file,
            database_url,
            allowed_chats_file,
        })
    }
}
