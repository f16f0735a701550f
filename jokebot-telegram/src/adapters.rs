//! Adapters from Telegram (teloxide) types to jokebot_core types.

use jokebot_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};
use teloxide::types::CallbackQuery;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn anonymous_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`] (kind Text).
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous_user),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.0.text().unwrap_or("").to_string(),
            kind: MessageKind::Text,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps a teloxide CallbackQuery (inline button press) for conversion to core [`Message`] (kind Callback).
///
/// The chat is the one holding the pressed keyboard; when Telegram omits that message, the presser's
/// private chat is used.
pub struct TelegramCallbackWrapper<'a>(pub &'a CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let (message_id, chat) = match self.0.message.as_ref() {
            Some(m) => (
                m.id().to_string(),
                Chat {
                    id: m.chat().id.0,
                    chat_type: format!("{:?}", m.chat().kind),
                },
            ),
            None => (
                String::new(),
                Chat {
                    id: user.id,
                    chat_type: "private".to_string(),
                },
            ),
        };
        Message {
            id: message_id,
            user,
            chat,
            content: self.0.data.clone().unwrap_or_default(),
            kind: MessageKind::Callback {
                query_id: self.0.id.0.clone(),
            },
            created_at: chrono::Utc::now(),
        }
    }
}
