//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

/// Asks Telegram for the bot's own username, used to match `/command@BotName`. `None` when
/// get_me fails or the account has no username.
#[instrument(skip(bot))]
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            info!(
                username = %username.as_deref().unwrap_or("unknown"),
                "Connected to Telegram"
            );
            username
        }
        Err(e) => {
            error!(
                error = %e,
                "get_me failed, commands addressed as /cmd@BotName will be ignored"
            );
            None
        }
    }
}

/// Starts the REPL with the given teloxide Bot and HandlerChain. Returns when the REPL stops
/// (Ctrl-C).
///
/// Each text message with a sender is converted to core::Message and passed to chain.handle in
/// a spawned task. Other updates are dropped.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            if msg.from.is_none() || msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Skipping non-text or anonymous message");
                return Ok(());
            }
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
