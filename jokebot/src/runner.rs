use anyhow::{Context, Result};
use joke_service::{build_joke_service, Joke, JokeServiceConfig};
use jokebot_core::{init_tracing, Bot};
use jokebot_telegram::{build_teloxide_bot, run_dispatcher, BotUsername, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::components::build_handler_chain;
use crate::config::BotConfig;
use crate::messages::COMMANDS;

/// Main entry: validate config, init logging, build the joke facade and handler chain, then poll
/// Telegram until Ctrl-C, SIGTERM or SIGABRT.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        backend = ?config.joke.backend,
        ab_test = config.joke.ab_test,
        model_paths = ?config.joke.model_paths,
        dataset_paths = ?config.joke.dataset_paths,
        "Initializing bot"
    );

    let service = build_joke_service(&config.joke).context("Failed to build joke service")?;
    let teloxide_bot = build_teloxide_bot(&config.telegram);
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let bot_username: BotUsername = Arc::new(tokio::sync::RwLock::new(None));
    let handler_chain = build_handler_chain(bot, service, bot_username.clone());

    info!("Bot started successfully");

    run_dispatcher(teloxide_bot, handler_chain, bot_username, COMMANDS).await
}

/// Generates one joke through the configured facade, without Telegram. Logs go to stdout and
/// `log_file` like a bot run.
#[instrument(skip(config))]
pub async fn tell_joke(config: &JokeServiceConfig, prompt: &str, log_file: &str) -> Result<Joke> {
    config.validate()?;
    init_tracing(log_file)?;
    let service = build_joke_service(config)?;
    let joke = service.generate_joke(prompt).await?;
    Ok(joke)
}
