//! Joke, polarity and feedback event.

use serde::{Deserialize, Serialize};

/// A generated joke. `id` correlates later feedback; `text` is markdown for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    pub text: String,
}

impl Joke {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Binary feedback signal attached to a previously generated joke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Wire code used in rating payloads.
    pub fn code(self) -> &'static str {
        match self {
            Polarity::Positive => "1",
            Polarity::Negative => "2",
        }
    }

    /// Parses a wire code; anything but "1" / "2" is unknown.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Polarity::Positive),
            "2" => Some(Polarity::Negative),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

/// One button press, consumed immediately by the grading operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEvent {
    pub user_id: String,
    pub joke_id: String,
    pub polarity: Polarity,
}

impl FeedbackEvent {
    pub fn new(user_id: &str, joke_id: &str, polarity: Polarity) -> Self {
        Self {
            user_id: user_id.to_string(),
            joke_id: joke_id.to_string(),
            polarity,
        }
    }
}
