//! Bot configuration: Telegram connectivity ([`TelegramConfig`]) + joke facade ([`JokeServiceConfig`]).

mod joke;


use anyhow::Result;
use joke_service::JokeServiceConfig;
use jokebot_telegram::TelegramConfig;

pub use joke::load_joke_config;

/// Full bot config, read once from the environment at startup and injected into the components.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub joke: JokeServiceConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let joke = load_joke_config()?;
        Ok(Self { telegram, joke })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.joke.validate()?;
        Ok(())
    }

    pub fn log_file(&self) -> &str {
        &self.telegram.log_file
    }
}
