//! BotConfig: BaseConfig + StorageConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, StorageConfig};

pub struct BotConfig {
    pub base: BaseConfig,
    pub storage: StorageConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let storage = StorageConfig::from_env()?;
        Ok(Self { base, storage })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
