use async_trait::async_trait;
use jokebot_core::{Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{debug, info, instrument};

/// Logs each update in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let username = message.user.username.as_deref().unwrap_or("unknown");
        match message.kind {
            MessageKind::Text => info!(
                user_id = message.user.id,
                "User {} (@{}) sent: \"{}\"",
                message.user.full_name(),
                username,
                message.content
            ),
            MessageKind::Callback { .. } => info!(
                user_id = message.user.id,
                "User {} (@{}) pressed: \"{}\"",
                message.user.full_name(),
                username,
                message.content
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
