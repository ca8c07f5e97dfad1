//! Bot entry point: config → logging → components → REPL → final save.

use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::{BaseConfig, BotConfig};
use crate::core::{init_tracing, Bot};
use crate::telegram::{fetch_bot_username, run_repl, TelegramBotAdapter};

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BaseConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Main entry: validate config, init logging, build components, run the REPL until Ctrl-C, then
/// save statistics once more.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        store_type = %config.storage().store_type,
        allowed_chats_file = %config.storage().allowed_chats_file,
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(config.base())?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let components = build_bot_components(config.storage(), bot, StdRng::from_os_rng()).await?;
    if let Some(username) = fetch_bot_username(&teloxide_bot).await {
        components.dispatcher.lock().await.set_bot_username(username);
    }
    let handler_chain = build_handler_chain(&components);

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain).await?;

    info!("Bot stopped, saving statistics");
    components
        .persistence
        .save()
        .await
        .context("Failed to save statistics on shutdown")?;

    Ok(())
}
