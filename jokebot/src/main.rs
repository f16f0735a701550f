//! Binary for the joke bot. `run` starts polling Telegram; `joke` prints one joke from the configured backend.

use anyhow::Result;
use clap::Parser;
use jokebot::{load_joke_config, run_bot, tell_joke, BotConfig, Cli, Commands};
use jokebot_telegram::TelegramConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Joke { prompt } => {
            let config = load_joke_config()?;
            let log_file = TelegramConfig::log_file_from_env();
            let joke = tell_joke(&config, prompt.as_deref().unwrap_or(""), &log_file).await?;
            println!("{}\n\n(id: {})", joke.text, joke.id);
            Ok(())
        }
    }
}
