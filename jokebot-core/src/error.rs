use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Chat platform API failure (send, answer callback, chat action).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    /// Rating payload without separator or with an unknown polarity code.
    #[error("Malformed callback data: {0}")]
    MalformedCallback(String),

    /// A callback-only operation was invoked for a text message.
    #[error("Not a callback query")]
    NotCallback,
}

pub type Result<T> = std::result::Result<T, BotError>;
