//! Config tests.

use crate::config::{BotConfig, StatsStoreType, StorageConfig};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "STATS_STORE_TYPE",
    "STATS_FILE",
    "DATABASE_URL",
    "ALLOWED_CHATS_FILE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/dice-bot.log");
    let storage = config.storage();
    assert_eq!(storage.store_type, StatsStoreType::Json);
    assert_eq!(storage.stats_file, "stats.json");
    assert_eq!(storage.database_url, "dice_bot.db");
    assert_eq!(storage.allowed_chats_file, "allowed_chats.txt");
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("TELOXIDE_API_URL", "http://localhost:8081");
    env::set_var("LOG_FILE", "/tmp/dice.log");
    env::set_var("STATS_STORE_TYPE", "SQLite");
    env::set_var("DATABASE_URL", "/tmp/dice.db");
    env::set_var("ALLOWED_CHATS_FILE", "/tmp/chats.txt");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.telegram_api_url(), Some("http://localhost:8081"));
    assert_eq!(config.log_file(), "/tmp/dice.log");
    assert_eq!(config.storage().store_type, StatsStoreType::Sqlite);
    assert_eq!(config.storage().database_url, "/tmp/dice.db");
    assert_eq!(config.storage().allowed_chats_file, "/tmp/chats.txt");

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");

    clear_env();
}

#[test]
#[serial]
fn test_missing_token_is_an_error() {
    clear_env();

    assert!(BotConfig::load(None).is_err());
    assert!(StorageConfig::from_env().is_ok());
}

#[test]
#[serial]
fn test_unknown_store_type_is_an_error() {
    clear_env();
    env::set_var("STATS_STORE_TYPE", "redis");

    assert!(StorageConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}
