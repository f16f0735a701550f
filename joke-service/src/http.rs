//! HTTP backend: talks JSON to a remote generation server that owns model loading and sampling.
//!
//! - `POST {base}/generate` `{prompt, model_path, dataset_path?, max_len, buffer_size, device}` → `{id?, text}`
//! - `POST {base}/grade` `{user_id, joke_id, grade, model_path}`, `grade` is "positive" or "negative"

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::backend::JokeBackend;
use crate::config::GenerationParams;
use crate::error::{JokeError, Result};
use crate::joke::{FeedbackEvent, Joke, Polarity};

#[derive(Debug, Clone)]
pub struct HttpJokeBackend {
    client: Client,
    base_url: String,
    model_path: String,
    dataset_path: Option<String>,
    params: GenerationParams,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    model_path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    dataset_path: Option<&'a str>,
    #[serde(flatten)]
    params: &'a GenerationParams,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    /// Servers send string or numeric ids; absent ids get a fresh UUID.
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GradeRequest<'a> {
    user_id: &'a str,
    joke_id: &'a str,
    grade: Polarity,
    model_path: &'a str,
}

fn id_from_value(value: Option<serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => uuid::Uuid::new_v4().to_string(),
    }
}

impl HttpJokeBackend {
    /// Creates a backend for `model_path` served at `base_url`.
    pub fn new(base_url: &str, model_path: &str, params: GenerationParams) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| JokeError::Config(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_path: model_path.to_string(),
            dataset_path: None,
            params,
        })
    }

    /// Pairs the model with a dataset, forwarded on every generation request.
    pub fn with_dataset(mut self, dataset_path: Option<String>) -> Self {
        self.dataset_path = dataset_path;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl JokeBackend for HttpJokeBackend {
    fn name(&self) -> &str {
        &self.model_path
    }

    #[instrument(skip(self), fields(model = %self.model_path))]
    async fn generate(&self, prompt: &str) -> Result<Joke> {
        let request = GenerateRequest {
            prompt,
            model_path: &self.model_path,
            dataset_path: self.dataset_path.as_deref(),
            params: &self.params,
        };
        debug!(url = %self.endpoint("generate"), "step: generation request");

        let response = self
            .client
            .post(self.endpoint("generate"))
            .json(&request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| JokeError::GenerationUnavailable(e.to_string()))?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| JokeError::GenerationUnavailable(format!("bad generation response: {}", e)))?;

        Ok(Joke {
            id: id_from_value(body.id),
            text: body.text,
        })
    }

    #[instrument(skip(self, event), fields(model = %self.model_path, joke_id = %event.joke_id))]
    async fn record_grade(&self, event: &FeedbackEvent) -> Result<()> {
        let request = GradeRequest {
            user_id: &event.user_id,
            joke_id: &event.joke_id,
            grade: event.polarity,
            model_path: &self.model_path,
        };
        self.client
            .post(self.endpoint("grade"))
            .json(&request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| JokeError::Grade(e.to_string()))?;
        Ok(())
    }
}
