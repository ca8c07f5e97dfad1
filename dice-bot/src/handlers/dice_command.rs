//! Runs bot commands through the dice dispatcher and sends the reply.

use std::sync::Arc;

use async_trait::async_trait;
use dice_engine::TextFormat;
use tracing::{error, info, instrument};

use crate::components::SharedDispatcher;
use crate::core::{Bot, Handler, HandlerResponse, Message, Result};

/// Refreshes the sender's display name in before(); handles `/roll`, `/help`, `/start`, `/stats`
/// in handle(). Other text is ignored.
pub struct DiceCommandHandler {
    dispatcher: SharedDispatcher,
    bot: Arc<dyn Bot>,
}

impl DiceCommandHandler {
    pub fn new(dispatcher: SharedDispatcher, bot: Arc<dyn Bot>) -> Self {
        Self { dispatcher, bot }
    }
}

#[async_trait]
impl Handler for DiceCommandHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        if let Some(name) = message.user.display_name() {
            self.dispatcher
                .lock()
                .await
                .stats_mut()
                .set_display_name(message.user.id, name);
        }
        Ok(true)
    }

    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = self.dispatcher.lock().await.handle_command(
            message.chat.id,
            message.user.id,
            &message.content,
        );
        let Some(reply) = reply else {
            return Ok(HandlerResponse::Ignore);
        };

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            command = %message.content,
            "Replying to command"
        );

        let sent = match reply.format {
            TextFormat::Plain => self.bot.send_message(&message.chat, &reply.text).await,
            TextFormat::Markdown => self.bot.send_markdown(&message.chat, &reply.text).await,
        };
        if let Err(e) = sent {
            error!(error = %e, chat_id = message.chat.id, "Failed to send reply");
        }

        Ok(HandlerResponse::Reply(reply.text))
    }
}
