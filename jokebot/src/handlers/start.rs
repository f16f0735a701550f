use async_trait::async_trait;
use jokebot_core::{Bot, Handler, HandlerResponse, Message, Result};
use jokebot_telegram::BotUsername;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::intent::{resolve_intent, Intent};
use crate::messages::{help_text, start_text};

/// Replies to /start (greeting, help, disclaimer) and /help (help, disclaimer).
pub struct StartHandler {
    bot: Arc<dyn Bot>,
    bot_username: BotUsername,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: BotUsername) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = match resolve_intent(message, &self.bot_username).await {
            Intent::Start => {
                info!(user = %message.user.full_name(), "START");
                start_text()
            }
            Intent::Help => help_text(),
            _ => return Ok(HandlerResponse::Continue),
        };
        self.bot.send_markdown(&message.chat, &text, &[]).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
