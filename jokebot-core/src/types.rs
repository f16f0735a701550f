//! Core types: user, chat, message, handler response, and the Handler / Middleware traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First and last name joined by a space; empty when neither is known.
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// What kind of update produced a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// A text message (commands included); `content` is the text.
    Text,
    /// An inline keyboard button press; `content` is the callback data.
    Callback { query_id: String },
}

/// A single incoming update: text message or callback query, normalized for the handler chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Callback query id when this message came from a button press.
    pub fn callback_query_id(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Callback { query_id } => Some(query_id.as_str()),
            MessageKind::Text => None,
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Stop the chain and attach reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

/// Cross-cutting step wrapped around every handler run (e.g. chat actions, logging).
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Runs before any handler. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Runs after the handlers, in reverse registration order.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>) -> User {
        User {
            id: 1,
            username: None,
            first_name: first.map(String::from),
            last_name: last.map(String::from),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(user(Some("Ada"), Some("Lovelace")).full_name(), "Ada Lovelace");
        assert_eq!(user(Some("Ada"), None).full_name(), "Ada");
        assert_eq!(user(None, Some("Lovelace")).full_name(), "Lovelace");
        assert_eq!(user(None, None).full_name(), "");
    }

    #[test]
    fn test_callback_query_id() {
        let mut message = Message {
            id: "1".to_string(),
            user: user(Some("Ada"), None),
            chat: Chat {
                id: 1,
                chat_type: "private".to_string(),
            },
            content: "42::1".to_string(),
            kind: MessageKind::Callback {
                query_id: "q1".to_string(),
            },
            created_at: Utc::now(),
        };
        assert_eq!(message.callback_query_id(), Some("q1"));

        message.kind = MessageKind::Text;
        assert_eq!(message.callback_query_id(), None);
    }
}
