//! What an incoming update asks for. Parsed from the core message by each handler.

use jokebot_core::{Message, MessageKind};
use jokebot_telegram::BotUsername;

/// Parsed meaning of one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// `/joke` without arguments.
    Joke,
    /// `/joke <text>` or any free text: a joke about the given words.
    Prompt(String),
    /// Inline button press; carries the raw callback data.
    Rate(String),
    /// Empty text, unknown command, or a command addressed to another bot.
    Unknown,
}

impl Intent {
    /// Parses `message`. `bot_username` (without `@`) filters out `/cmd@otherbot`; when unknown,
    /// any addressee is accepted.
    pub fn parse(message: &Message, bot_username: Option<&str>) -> Intent {
        if let MessageKind::Callback { .. } = message.kind {
            return Intent::Rate(message.content.clone());
        }

        let text = message.content.trim();
        if text.is_empty() {
            return Intent::Unknown;
        }

        let Some(command_line) = text.strip_prefix('/') else {
            return Intent::Prompt(text.to_string());
        };

        let (head, args) = command_line
            .split_once(char::is_whitespace)
            .map(|(h, a)| (h, a.trim()))
            .unwrap_or((command_line, ""));
        let (command, addressee) = match head.split_once('@') {
            Some((c, a)) => (c, Some(a)),
            None => (head, None),
        };

        if let (Some(addressee), Some(me)) = (addressee, bot_username) {
            if !addressee.eq_ignore_ascii_case(me) {
                return Intent::Unknown;
            }
        }

        match command.to_ascii_lowercase().as_str() {
            "start" => Intent::Start,
            "help" => Intent::Help,
            "joke" if args.is_empty() => Intent::Joke,
            "joke" => Intent::Prompt(args.to_string()),
            _ => Intent::Unknown,
        }
    }

    /// Prompt passed to the joke service, or None when the intent does not ask for a joke.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            Intent::Joke => Some(""),
            Intent::Prompt(p) => Some(p.as_str()),
            _ => None,
        }
    }
}

/// Parses `message` against the cached bot username.
pub async fn resolve_intent(message: &Message, bot_username: &BotUsername) -> Intent {
    let username = bot_username.read().await;
    Intent::parse(message, username.as_deref())
}
