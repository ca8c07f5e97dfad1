//! # Dice bot application
//!
//! Telegram bot answering `/roll`, `/help`, `/start` and `/stats` in allowed chats. Wires the
//! `dice-engine` dispatcher and `dice-storage` stores into a handler chain and runs the teloxide
//! REPL. Core (Handler, Bot, Message), chain (HandlerChain) and telegram (run_repl, adapters)
//! live here as modules.

pub mod admin;
pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, ChatsAction, Cli, Commands, StatsAction};

pub use self::core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerResponse, Message, Result, ToCoreMessage,
    ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    fetch_bot_username, run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper,
};

pub use config::{BaseConfig, BotConfig, StatsStoreType, StorageConfig};
pub use runner::{build_teloxide_bot, run_bot};

pub use components::{
    build_bot_components, build_handler_chain, create_snapshot_store, load_stats,
    BotComponents, SharedDispatcher,
};
pub use handlers::{
    ChatAllowListHandler, DiceCommandHandler, LoggingHandler, StatsPersistenceHandler,
};
