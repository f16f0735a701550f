//! Wraps teloxide::Bot and implements [`jokebot_core::Bot`]. Production code talks to Telegram;
//! tests substitute another Bot impl.

use async_trait::async_trait;
use jokebot_core::{Bot as CoreBot, BotError, Chat, InlineButton, Result};
use teloxide::prelude::*;
use teloxide::{ApiError, RequestError};
use teloxide::types::{
    CallbackQueryId, ChatAction, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode,
};
use tracing::warn;

/// Thin wrapper around teloxide::Bot that implements jokebot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

fn transport_error(e: RequestError) -> BotError {
    BotError::Transport(e.to_string())
}

/// True only when Telegram refused the message's markdown entities.
fn is_markup_rejection(e: &RequestError) -> bool {
    matches!(e, RequestError::Api(ApiError::CantParseEntities(_)))
}

/// One keyboard row holding all `buttons`; None when there are no buttons.
fn keyboard(buttons: &[InlineButton]) -> Option<InlineKeyboardMarkup> {
    if buttons.is_empty() {
        return None;
    }
    let row: Vec<InlineKeyboardButton> = buttons
        .iter()
        .map(|b| InlineKeyboardButton::callback(b.text.clone(), b.callback_data.clone()))
        .collect();
    Some(InlineKeyboardMarkup::new(vec![row]))
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }

    #[allow(deprecated)]
    async fn send_with_mode(
        &self,
        chat: &Chat,
        text: &str,
        markup: Option<InlineKeyboardMarkup>,
        markdown: bool,
    ) -> std::result::Result<teloxide::types::Message, RequestError> {
        let mut request = self.bot.send_message(ChatId(chat.id), text.to_string());
        if markdown {
            request = request.parse_mode(ParseMode::Markdown);
        }
        if let Some(markup) = markup {
            request = request.reply_markup(markup);
        }
        request.await
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    /// Generated text may be invalid markdown; Telegram then rejects the entities and the text is
    /// resent as plain text with the same keyboard. Other failures are not retried.
    async fn send_markdown(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<String> {
        let sent = match self.send_with_mode(chat, text, keyboard(buttons), true).await {
            Ok(sent) => sent,
            Err(e) if is_markup_rejection(&e) => {
                warn!(chat_id = chat.id, error = %e, "Markdown rejected, resending as plain text");
                self.send_with_mode(chat, text, keyboard(buttons), false)
                    .await
                    .map_err(transport_error)?
            }
            Err(e) => return Err(transport_error(e)),
        };
        Ok(sent.id.to_string())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str, text: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()));
        if let Some(text) = text {
            request = request.text(text.to_string());
        }
        request.await.map_err(transport_error)?;
        Ok(())
    }
}
