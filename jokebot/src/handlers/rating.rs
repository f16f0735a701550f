use async_trait::async_trait;
use joke_service::{decode_rating, JokeService, Polarity};
use jokebot_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::intent::Intent;
use crate::messages::{FEEDBACK_FAILED, FEEDBACK_THANKS};

/// Turns a rating button press into exactly one grade call and answers the callback query.
///
/// Grades are credited to the user who pressed the button (`from.id`), not to the chat holding the
/// keyboard. The two coincide in private chats; in groups every member's vote counts separately.
/// Undecodable data is answered silently without grading.
pub struct RatingHandler {
    bot: Arc<dyn Bot>,
    service: Arc<dyn JokeService>,
}

impl RatingHandler {
    pub fn new(bot: Arc<dyn Bot>, service: Arc<dyn JokeService>) -> Self {
        Self { bot, service }
    }
}

/// Decodes callback data into the rated joke and polarity.
fn decode_payload(payload: &str) -> std::result::Result<(String, Polarity), HandlerError> {
    decode_rating(payload).map_err(|e| HandlerError::MalformedCallback(format!("{:?}: {}", payload, e)))
}

#[async_trait]
impl Handler for RatingHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        // callbacks carry no command, so the bot username is irrelevant here
        let Intent::Rate(payload) = Intent::parse(message, None) else {
            return Ok(HandlerResponse::Continue);
        };
        let query_id = message
            .callback_query_id()
            .ok_or(HandlerError::NotCallback)?;

        let (joke_id, polarity) = match decode_payload(&payload) {
            Ok(decoded) => decoded,
            Err(e) => {
                debug!(error = %e, "Ignoring undecodable callback data");
                self.bot.answer_callback(query_id, None).await?;
                return Ok(HandlerResponse::Stop);
            }
        };

        let user_id = message.user.id.to_string();
        match self.service.grade(&user_id, &joke_id, polarity).await {
            Ok(()) => {
                info!(
                    user_id = %user_id,
                    joke_id = %joke_id,
                    grade = polarity.as_str(),
                    "step: grade recorded"
                );
                self.bot.answer_callback(query_id, Some(FEEDBACK_THANKS)).await?;
            }
            Err(e) => {
                warn!(user_id = %user_id, joke_id = %joke_id, error = %e, "Grade failed");
                self.bot.answer_callback(query_id, Some(FEEDBACK_FAILED)).await?;
            }
        }
        Ok(HandlerResponse::Stop)
    }
}
