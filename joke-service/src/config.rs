//! Facade configuration: backend kind, single vs A/B, artifact paths and generation parameters.

use serde::Serialize;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{JokeError, Result};

/// Where jokes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Remote generation server (model inference happens there).
    Http,
    /// Jokes read from local dataset files.
    Dataset,
}

impl FromStr for BackendKind {
    type Err = JokeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(BackendKind::Http),
            "dataset" => Ok(BackendKind::Dataset),
            other => Err(JokeError::Config(format!(
                "unknown joke backend {:?} (expected \"http\" or \"dataset\")",
                other
            ))),
        }
    }
}

/// Parameters forwarded to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub max_len: usize,
    pub buffer_size: usize,
    pub device: String,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_len: 200,
            buffer_size: 10,
            device: "cpu".to_string(),
        }
    }
}

/// Everything needed to build the facade; read once at startup.
#[derive(Debug, Clone)]
pub struct JokeServiceConfig {
    pub backend: BackendKind,
    pub ab_test: bool,
    pub generation_url: String,
    pub model_paths: Vec<String>,
    pub dataset_paths: Vec<String>,
    pub params: GenerationParams,
    pub timeout: Duration,
}

impl JokeServiceConfig {
    /// Checks that the selected backend has what it needs.
    pub fn validate(&self) -> Result<()> {
        if self.params.max_len == 0 {
            return Err(JokeError::Config("max joke length must be positive".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(JokeError::Config("generation timeout must be positive".to_string()));
        }
        match self.backend {
            BackendKind::Http => {
                if self.model_paths.is_empty() {
                    return Err(JokeError::Config(
                        "http backend needs at least one model path".to_string(),
                    ));
                }
                reqwest::Url::parse(&self.generation_url).map_err(|e| {
                    JokeError::Config(format!(
                        "generation url {:?} is not a valid URL: {}",
                        self.generation_url, e
                    ))
                })?;
            }
            BackendKind::Dataset => {
                if self.dataset_paths.is_empty() {
                    return Err(JokeError::Config(
                        "dataset backend needs at least one dataset path".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}
