//! # jokebot
//!
//! Telegram joke bot application: env configuration, intent parsing, handlers, typing middleware and
//! component assembly. Telegram I/O lives in `jokebot-telegram`, joke generation in `joke-service`.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod intent;
pub mod messages;
pub mod middleware;
pub mod runner;

pub use cli::{Cli, Commands};
pub use components::build_handler_chain;
pub use config::{load_joke_config, BotConfig};
pub use handlers::{JokeHandler, LoggingHandler, RatingHandler, StartHandler};
pub use intent::{resolve_intent, Intent};
pub use middleware::TypingMiddleware;
pub use runner::{run_bot, tell_joke};
