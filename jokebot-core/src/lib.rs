//! # jokebot-core
//!
//! Core types and traits for the joke bot: [`Bot`], [`Handler`], [`Middleware`], message and user types,
//! and tracing initialization. Transport-agnostic; used by jokebot-telegram, handler-chain and the app.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, InlineButton};
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageKind, Middleware,
    ToCoreMessage, ToCoreUser, User,
};
