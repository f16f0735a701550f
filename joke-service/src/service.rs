//! The facade contract used by the bot transport.

use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::backend::JokeBackend;
use crate::error::{JokeError, Result};
use crate::joke::{FeedbackEvent, Joke, Polarity};

/// Uniform interface over one or more generation backends. Variant-transparent: callers never see
/// which backend produced a joke, and grades are attributed to it automatically.
///
/// Implementations are shared as `Arc<dyn JokeService>` and called concurrently from dispatch tasks.
#[async_trait]
pub trait JokeService: Send + Sync {
    /// Generates a joke; empty `prompt` is "surprise me". Fails with [`JokeError::GenerationUnavailable`].
    async fn generate_joke(&self, prompt: &str) -> Result<Joke>;

    /// Records approval of `joke_id` by `user_id`. Not deduplicated at this layer.
    async fn positive_grade(&self, user_id: &str, joke_id: &str) -> Result<()>;

    /// Records disapproval of `joke_id` by `user_id`. Not deduplicated at this layer.
    async fn negative_grade(&self, user_id: &str, joke_id: &str) -> Result<()>;

    /// Dispatches to [`positive_grade`](Self::positive_grade) or [`negative_grade`](Self::negative_grade).
    async fn grade(&self, user_id: &str, joke_id: &str, polarity: Polarity) -> Result<()> {
        match polarity {
            Polarity::Positive => self.positive_grade(user_id, joke_id).await,
            Polarity::Negative => self.negative_grade(user_id, joke_id).await,
        }
    }
}

/// Default bound on one generation call.
pub(crate) const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Calls `backend.generate` under `timeout` and enforces a non-empty id and text.
/// Every failure comes back as [`JokeError::GenerationUnavailable`].
pub(crate) async fn generate_checked(
    backend: &dyn JokeBackend,
    prompt: &str,
    timeout: Duration,
) -> Result<Joke> {
    let started = Instant::now();
    let outcome = tokio::time::timeout(timeout, backend.generate(prompt)).await;

    let joke = match outcome {
        Err(_) => {
            warn!(backend = %backend.name(), timeout_secs = timeout.as_secs(), "step: generation timed out");
            return Err(JokeError::GenerationUnavailable(format!(
                "{} timed out after {}s",
                backend.name(),
                timeout.as_secs()
            )));
        }
        Ok(Err(JokeError::GenerationUnavailable(reason))) => {
            return Err(JokeError::GenerationUnavailable(reason));
        }
        Ok(Err(e)) => return Err(JokeError::GenerationUnavailable(e.to_string())),
        Ok(Ok(joke)) => joke,
    };

    if joke.id.trim().is_empty() || joke.text.trim().is_empty() {
        warn!(backend = %backend.name(), "step: backend returned an empty joke");
        return Err(JokeError::GenerationUnavailable(format!(
            "{} returned no content",
            backend.name()
        )));
    }

    info!(
        backend = %backend.name(),
        joke_id = %joke.id,
        prompt_len = prompt.len(),
        text_len = joke.text.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "step: joke generated"
    );
    Ok(joke)
}

/// Calls `backend.record_grade` under `timeout`; an unresponsive backend becomes [`JokeError::Grade`].
pub(crate) async fn record_checked(
    backend: &dyn JokeBackend,
    event: &FeedbackEvent,
    timeout: Duration,
) -> Result<()> {
    match tokio::time::timeout(timeout, backend.record_grade(event)).await {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(
                backend = %backend.name(),
                joke_id = %event.joke_id,
                timeout_secs = timeout.as_secs(),
                "step: grade timed out"
            );
            Err(JokeError::Grade(format!(
                "{} did not record the grade within {}s",
                backend.name(),
                timeout.as_secs()
            )))
        }
    }
}
