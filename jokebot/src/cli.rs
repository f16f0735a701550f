//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jokebot")]
#[command(about = "Telegram joke bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Generate one joke with the configured backend and print it (no Telegram).
    Joke {
        #[arg(short, long)]
        prompt: Option<String>,
    },
}
