//! Bot abstraction for sending replies, chat actions and callback answers.
//!
//! [`Bot`] is transport-agnostic; `jokebot_telegram::TelegramBotAdapter` implements it via teloxide,
//! tests substitute a recording mock.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// One inline keyboard button: label shown to the user and the callback data sent back on press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn new(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Abstraction for talking back to the chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a markdown-formatted message with an optional single row of inline buttons.
    /// Returns the transport message id.
    async fn send_markdown(&self, chat: &Chat, text: &str, buttons: &[InlineButton])
        -> Result<String>;

    /// Shows the transient "typing" indicator in the chat.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;

    /// Answers a callback query (stops the button's loading spinner); `text` is shown as a notice.
    async fn answer_callback(&self, query_id: &str, text: Option<&str>) -> Result<()>;
}
