use async_trait::async_trait;
use jokebot_core::{Bot, Message, Middleware, Result};
use jokebot_telegram::BotUsername;
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::intent::resolve_intent;

/// Shows "typing" before handlers run for updates that will generate a joke.
/// A failed chat action is logged and never stops the chain.
pub struct TypingMiddleware {
    bot: Arc<dyn Bot>,
    bot_username: BotUsername,
}

impl TypingMiddleware {
    pub fn new(bot: Arc<dyn Bot>, bot_username: BotUsername) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Middleware for TypingMiddleware {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        if resolve_intent(message, &self.bot_username)
            .await
            .prompt()
            .is_some()
        {
            if let Err(e) = self.bot.send_typing(&message.chat).await {
                warn!(chat_id = message.chat.id, error = %e, "Failed to send typing action");
            }
        }
        Ok(true)
    }
}
