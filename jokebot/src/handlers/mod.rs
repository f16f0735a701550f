//! Chat handlers. Each one parses the [`Intent`](crate::Intent) and acts only on its own.

mod joke;
mod logging;
mod rating;
mod start;

pub use joke::JokeHandler;
pub use logging::LoggingHandler;
pub use rating::RatingHandler;
pub use start::StartHandler;
