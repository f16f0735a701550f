//! # joke-service
//!
//! The Joke Service Facade the bot transport talks to. [`JokeService`] is the variant-transparent
//! contract (generate, positive grade, negative grade); [`SingleJokeService`] and [`AbTestJokeService`]
//! implement it over one or several [`JokeBackend`]s ([`HttpJokeBackend`], [`DatasetJokeBackend`]).
//! The [`rating`] module owns the inline-keyboard callback payload format.

mod backend;
mod config;
mod dataset;
mod error;
mod factory;
mod http;
mod joke;
pub mod rating;
mod service;
mod single;

pub use ab_test::AbTestJokeService;
pub use backend::JokeBackend;
pub use config::{BackendKind, GenerationParams, JokeServiceConfig};
pub use dataset::{DatasetJokeBackend, GradeTally};
pub use error::{JokeError, Result};
pub use factory::build_joke_service;
pub use http::HttpJokeBackend;
pub use joke::{FeedbackEvent, Joke, Polarity};
pub use rating::{decode_rating, encode_rating, RatingError, SEPARATOR};
pub use service::JokeService;
pub use single::SingleJokeService;
