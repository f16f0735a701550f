use thiserror::Error;

#[derive(Error, Debug)]
pub enum JokeError {
    /// Backend failed, timed out or returned no content.
    #[error("Generation unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("Grade not recorded: {0}")]
    Grade(String),

    /// Joke id carries no (or an out-of-range) A/B variant tag.
    #[error("Unknown variant for joke id: {0}")]
    UnknownVariant(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JokeError>;
