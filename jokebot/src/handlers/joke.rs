use async_trait::async_trait;
use joke_service::{encode_rating, Joke, JokeService, Polarity};
use jokebot_core::{Bot, Handler, HandlerResponse, InlineButton, Message, Result};
use jokebot_telegram::BotUsername;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::intent::resolve_intent;
use crate::messages::{GENERATION_FAILED, NEGATIVE_BUTTON, POSITIVE_BUTTON};

/// Answers /joke and free text with a generated joke plus 👍 / 👎 rating buttons.
///
/// The joke text is sent verbatim as markdown. When generation fails the user gets a short apology
/// and the chain stops.
pub struct JokeHandler {
    bot: Arc<dyn Bot>,
    service: Arc<dyn JokeService>,
    bot_username: BotUsername,
}

impl JokeHandler {
    pub fn new(bot: Arc<dyn Bot>, service: Arc<dyn JokeService>, bot_username: BotUsername) -> Self {
        Self {
            bot,
            service,
            bot_username,
        }
    }
}

/// Rating keyboard for `joke`. Empty when the id cannot be carried in callback data.
fn rating_buttons(joke: &Joke) -> Vec<InlineButton> {
    let encoded = encode_rating(&joke.id, Polarity::Positive)
        .and_then(|up| encode_rating(&joke.id, Polarity::Negative).map(|down| (up, down)));
    match encoded {
        Ok((up, down)) => vec![
            InlineButton::new(POSITIVE_BUTTON, up),
            InlineButton::new(NEGATIVE_BUTTON, down),
        ],
        Err(e) => {
            warn!(joke_id = %joke.id, error = %e, "Joke id not encodable, sending without rating buttons");
            Vec::new()
        }
    }
}

#[async_trait]
impl Handler for JokeHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let intent = resolve_intent(message, &self.bot_username).await;
        let Some(prompt) = intent.prompt() else {
            return Ok(HandlerResponse::Continue);
        };

        info!(user_id = message.user.id, prompt = %prompt, "step: generating joke");
        match self.service.generate_joke(prompt).await {
            Ok(joke) => {
                let buttons = rating_buttons(&joke);
                self.bot
                    .send_markdown(&message.chat, &joke.text, &buttons)
                    .await?;
                info!(user_id = message.user.id, joke_id = %joke.id, "step: joke sent");
                Ok(HandlerResponse::Reply(joke.text))
            }
            Err(e) => {
                warn!(user_id = message.user.id, error = %e, "Joke generation failed");
                self.bot.send_message(&message.chat, GENERATION_FAILED).await?;
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
