//! Shared fixtures for dispatch tests: a recording [`MockBot`], a scripted [`FakeJokeService`] and
//! message builders. Bot and service write into one [`Journal`] so tests can assert on ordering.

pub mod fake_service;
pub mod mock_bot;

use std::sync::{Arc, Mutex};

use jokebot_core::{Chat, Message, MessageKind, User};

/// One observable side effect, from either the bot or the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SendMessage { chat_id: i64, text: String },
    SendMarkdown { chat_id: i64, text: String, buttons: Vec<(String, String)> },
    Typing { chat_id: i64 },
    AnswerCallback { query_id: String, text: Option<String> },
    Generate { prompt: String },
    PositiveGrade { user_id: String, joke_id: String },
    NegativeGrade { user_id: String, joke_id: String },
}

#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    pub fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }
}

pub const USER_ID: i64 = 1001;
pub const CHAT_ID: i64 = 2002;

fn user() -> User {
    User {
        id: USER_ID,
        username: Some("ann".to_string()),
        first_name: Some("Ann".to_string()),
        last_name: Some("Lee".to_string()),
    }
}

fn chat() -> Chat {
    Chat {
        id: CHAT_ID,
        chat_type: "Private".to_string(),
    }
}

pub fn text_message(text: &str) -> Message {
    Message {
        id: "m1".to_string(),
        user: user(),
        chat: chat(),
        content: text.to_string(),
        kind: MessageKind::Text,
        created_at: chrono::Utc::now(),
    }
}

pub fn callback_message(data: &str) -> Message {
    Message {
        id: "m2".to_string(),
        user: user(),
        chat: chat(),
        content: data.to_string(),
        kind: MessageKind::Callback {
            query_id: "q1".to_string(),
        },
        created_at: chrono::Utc::now(),
    }
}
