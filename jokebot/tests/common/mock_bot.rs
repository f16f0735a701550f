//! Mock implementation of [`jokebot_core::Bot`] that records every call into the shared journal.

use async_trait::async_trait;
use jokebot_core::{Bot, BotError, Chat, InlineButton, Result};

use super::{Event, Journal};

pub struct MockBot {
    journal: Journal,
    fail_typing: bool,
}

impl MockBot {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            fail_typing: false,
        }
    }

    /// Typing actions fail with a transport error (still recorded).
    pub fn failing_typing(journal: Journal) -> Self {
        Self {
            journal,
            fail_typing: true,
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.journal.push(Event::SendMessage {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str, buttons: &[InlineButton]) -> Result<String> {
        self.journal.push(Event::SendMarkdown {
            chat_id: chat.id,
            text: text.to_string(),
            buttons: buttons
                .iter()
                .map(|b| (b.text.clone(), b.callback_data.clone()))
                .collect(),
        });
        Ok("100".to_string())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.journal.push(Event::Typing { chat_id: chat.id });
        if self.fail_typing {
            return Err(BotError::Transport("chat action rejected".to_string()));
        }
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str, text: Option<&str>) -> Result<()> {
        self.journal.push(Event::AnswerCallback {
            query_id: query_id.to_string(),
            text: text.map(String::from),
        });
        Ok(())
    }
}
