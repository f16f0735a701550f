//! The seam to the external generation collaborator.

use async_trait::async_trait;

use crate::error::Result;
use crate::joke::{FeedbackEvent, Joke};

/// One generation backend (a model server, a dataset). Facades wrap one or several of these.
#[async_trait]
pub trait JokeBackend: Send + Sync {
    /// Short name for logs (model path, dataset tag).
    fn name(&self) -> &str;

    /// Generates a joke for `prompt`; an empty prompt means "surprise me".
    async fn generate(&self, prompt: &str) -> Result<Joke>;

    /// Records one grade. Deduplication, if any, is up to the backend.
    async fn record_grade(&self, event: &FeedbackEvent) -> Result<()>;
}
