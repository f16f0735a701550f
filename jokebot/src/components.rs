//! Component assembly: wires the bot, the joke facade and the username cache into a [`HandlerChain`].

use handler_chain::HandlerChain;
use joke_service::JokeService;
use jokebot_core::Bot;
use jokebot_telegram::BotUsername;
use std::sync::Arc;

use crate::handlers::{JokeHandler, LoggingHandler, RatingHandler, StartHandler};
use crate::middleware::TypingMiddleware;

/// Builds the chain: typing middleware, then logging → start/help → rating → joke.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    service: Arc<dyn JokeService>,
    bot_username: BotUsername,
) -> HandlerChain {
    HandlerChain::new()
        .add_middleware(Arc::new(TypingMiddleware::new(
            bot.clone(),
            bot_username.clone(),
        )))
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(bot.clone(), bot_username.clone())))
        .add_handler(Arc::new(RatingHandler::new(bot.clone(), service.clone())))
        .add_handler(Arc::new(JokeHandler::new(bot, service, bot_username)))
}
