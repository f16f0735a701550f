//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and passes them
//! to the HandlerChain. Registers the command menu and caches the bot username before polling.

use anyhow::Result;
use handler_chain::HandlerChain;
use jokebot_core::{Message as CoreMessage, ToCoreMessage};
use std::sync::Arc;
use teloxide::dispatching::ShutdownToken;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, CallbackQuery};
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use super::config::TelegramConfig;

/// Bot username cache, filled from getMe at startup; handlers read it to strip `@botname` from commands.
pub type BotUsername = Arc<tokio::sync::RwLock<Option<String>>>;

/// Builds the teloxide Bot, pointing it at `telegram_api_url` when configured.
pub fn build_teloxide_bot(config: &TelegramConfig) -> Bot {
    let bot = Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Runs the chain for one update. Chain errors are logged and never reach the dispatcher.
async fn run_chain(chain: &HandlerChain, core_msg: &CoreMessage) {
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_id = %core_msg.id,
        "step: processing update (handler chain started)"
    );
    if let Err(e) = chain.handle(core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
    }
}

async fn on_message(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    match msg.text() {
        Some(text) => {
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %text,
                "Received message"
            );
            run_chain(&chain, &core_msg).await;
        }
        None => {
            debug!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                "Received non-text message, ignored"
            );
        }
    }
    Ok(())
}

async fn on_callback(query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramCallbackWrapper(&query).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        data = %core_msg.content,
        "Received callback query"
    );
    run_chain(&chain, &core_msg).await;
    Ok(())
}

/// Stops the dispatcher gracefully on SIGTERM or SIGABRT; Ctrl-C is handled by teloxide itself.
#[cfg(unix)]
fn spawn_signal_shutdown(token: ShutdownToken) {
    use tokio::signal::unix::{signal, SignalKind};

    const SIGABRT: i32 = 6;

    tokio::spawn(async move {
        let (mut term, mut abort) = match (
            signal(SignalKind::terminate()),
            signal(SignalKind::from_raw(SIGABRT)),
        ) {
            (Ok(term), Ok(abort)) => (term, abort),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Failed to install signal handlers; only Ctrl-C stops the bot");
                return;
            }
        };
        let name = tokio::select! {
            _ = term.recv() => "SIGTERM",
            _ = abort.recv() => "SIGABRT",
        };
        info!(signal = name, "Shutdown signal received, stopping dispatcher");
        match token.shutdown() {
            Ok(done) => done.await,
            Err(_) => debug!("Dispatcher was not running"),
        }
    });
}

#[cfg(not(unix))]
fn spawn_signal_shutdown(_token: ShutdownToken) {}

/// Polls Telegram and feeds every text message and callback query to `handler_chain` until shutdown.
///
/// Before polling: getMe fills `bot_username`, and `commands` (name, description) become the bot's
/// command menu. Both are best effort.
#[instrument(skip(bot, handler_chain, bot_username, commands))]
pub async fn run_dispatcher(
    bot: Bot,
    handler_chain: HandlerChain,
    bot_username: BotUsername,
    commands: &[(&str, &str)],
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "getMe failed; commands addressed as /cmd@bot will not be recognized"),
    }

    if !commands.is_empty() {
        let menu: Vec<BotCommand> = commands
            .iter()
            .map(|(name, description)| BotCommand::new(*name, *description))
            .collect();
        if let Err(e) = bot.set_my_commands(menu).await {
            warn!(error = %e, "Failed to register command menu");
        }
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|update| async move {
            debug!(update_id = ?update.id, "Unhandled update kind, dropped");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build();

    spawn_signal_shutdown(dispatcher.shutdown_token());

    info!("Dispatcher started");
    dispatcher.dispatch().await;
    info!("Dispatcher stopped");

    Ok(())
}
