//! Joke facade config from env: JOKE_BACKEND, AB_TEST, GENERATION_URL, MODEL_PATHS, DATASET_PATHS,
//! MAX_JOKE_LEN, BUFFER_SIZE, DEVICE, GENERATION_TIMEOUT_SECS.

use anyhow::{Context, Result};
use joke_service::{BackendKind, GenerationParams, JokeServiceConfig};
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_GENERATION_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Comma-separated list; blank entries are dropped.
fn list_var(name: &str) -> Vec<String> {
    env::var(name)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn parsed_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", name, v)),
        _ => Ok(default),
    }
}

/// Loads the facade config. Only the joke part is read, so this works without BOT_TOKEN.
pub fn load_joke_config() -> Result<JokeServiceConfig> {
    let backend = match env::var("JOKE_BACKEND") {
        Ok(v) if !v.trim().is_empty() => {
            BackendKind::from_str(&v).context("JOKE_BACKEND is invalid")?
        }
        _ => BackendKind::Http,
    };
    let ab_test = env::var("AB_TEST")
        .map(|v| v.trim().eq_ignore_ascii_case("true") || v.trim() == "1")
        .unwrap_or(false);
    let generation_url =
        env::var("GENERATION_URL").unwrap_or_else(|_| DEFAULT_GENERATION_URL.to_string());

    let defaults = GenerationParams::default();
    let params = GenerationParams {
        max_len: parsed_var("MAX_JOKE_LEN", defaults.max_len)?,
        buffer_size: parsed_var("BUFFER_SIZE", defaults.buffer_size)?,
        device: env::var("DEVICE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.device),
    };
    let timeout = Duration::from_secs(parsed_var("GENERATION_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?);

    Ok(JokeServiceConfig {
        backend,
        ab_test,
        generation_url,
        model_paths: list_var("MODEL_PATHS"),
        dataset_paths: list_var("DATASET_PATHS"),
        params,
        timeout,
    })
}
