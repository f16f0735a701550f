//! User-facing texts and the command menu.

pub const GREETING_MESSAGE: &str = "Welcome to yesmeme bot!";

pub const HELP_MESSAGE: &str = "Send /joke for a random joke, or write a few words and I will try \
to joke about them.\nRate every joke with 👍 or 👎 so the bot gets funnier.";

pub const DISCLAIMER_MESSAGE: &str =
    "*Disclaimer:* jokes are generated by a language model and may be silly, dark or off-color.";

pub const FEEDBACK_THANKS: &str = "Thank you for your feedback";

pub const FEEDBACK_FAILED: &str = "Sorry, your rating could not be saved. Please try again later.";

pub const GENERATION_FAILED: &str =
    "Sorry, I could not come up with a joke right now. Please try again in a moment.";

pub const POSITIVE_BUTTON: &str = "👍";
pub const NEGATIVE_BUTTON: &str = "👎";

/// Command menu registered at startup: (command, description).
pub const COMMANDS: &[(&str, &str)] = &[
    ("start", "Greeting and how to use the bot"),
    ("help", "How to use the bot"),
    ("joke", "Tell a joke, optionally about the given words"),
];

/// Reply to /start.
pub fn start_text() -> String {
    format!("{}\n\n{}\n\n{}", GREETING_MESSAGE, HELP_MESSAGE, DISCLAIMER_MESSAGE)
}

/// Reply to /help.
pub fn help_text() -> String {
    format!("{}\n\n{}", HELP_MESSAGE, DISCLAIMER_MESSAGE)
}
