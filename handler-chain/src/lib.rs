//! # Handler chain
//!
//! Runs a sequence of middleware (before/after) and handlers for each incoming update. Middleware can stop
//! the chain; the first handler that returns Stop or Reply ends handler execution; middleware after
//! callbacks run in reverse order.

use jokebot_core::{Handler, HandlerResponse, Message, MessageKind, Middleware, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of middleware and handlers: middleware before (in order), then handlers, then middleware after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    middleware: Vec<Arc<dyn Middleware>>,
    handlers: Vec<Arc<dyn Handler>>,
}

fn kind_label(message: &Message) -> &'static str {
    match message.kind {
        MessageKind::Text => "text",
        MessageKind::Callback { .. } => "callback",
    }
}

impl HandlerChain {
    /// Creates an empty chain (no middleware, no handlers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware (runs before handlers, after in reverse).
    pub fn add_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Appends a handler (runs in order; first Stop/Reply ends handler phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers (middleware not counted).
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs middleware before, handler before, handlers until Stop/Reply, then handler after and middleware after
    /// in reverse. Returns the first Stop or Reply, or Continue when no handler claimed the update.
    #[instrument(skip(self, message), fields(kind = kind_label(message)))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        if !self.run_middleware_before(message).await? {
            return Ok(HandlerResponse::Stop);
        }

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            if !h.before(message).await? {
                info!(user_id = message.user.id, handler = %name, "step: handler before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let final_response = self.run_handlers(message).await?;

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        for mw in self.middleware.iter().rev() {
            let name = std::any::type_name_of_val(mw.as_ref());
            debug!(user_id = message.user.id, middleware = %name, "step: middleware after");
            mw.after(message, &final_response).await?;
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }

    async fn run_middleware_before(&self, message: &Message) -> Result<bool> {
        for mw in &self.middleware {
            let name = std::any::type_name_of_val(mw.as_ref());
            debug!(user_id = message.user.id, middleware = %name, "step: middleware before");
            if !mw.before(message).await? {
                info!(
                    user_id = message.user.id,
                    middleware = %name,
                    "step: middleware before returned false, chain stopped"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn run_handlers(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            let (response_type, reply_len) = match &response {
                HandlerResponse::Continue => ("Continue", None),
                HandlerResponse::Stop => ("Stop", None),
                HandlerResponse::Reply(s) => ("Reply", Some(s.len())),
            };
            debug!(
                user_id = message.user.id,
                handler = %name,
                response_type = %response_type,
                reply_len = ?reply_len,
                "step: handler done"
            );

            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                info!(user_id = message.user.id, handler = %name, "step: handler chain stopped by handler");
                return Ok(response);
            }
        }
        Ok(HandlerResponse::Continue)
    }
}

// Integration tests live in tests/handler_chain_test.rs
