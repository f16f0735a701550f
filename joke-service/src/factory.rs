//! Builds the facade selected by configuration.

use std::sync::Arc;
use tracing::info;

use crate::ab_test::AbTestJokeService;
use crate::backend::JokeBackend;
use crate::config::{BackendKind, JokeServiceConfig};
use crate::dataset::DatasetJokeBackend;
use crate::error::{JokeError, Result};
use crate::http::HttpJokeBackend;
use crate::service::JokeService;
use crate::single::SingleJokeService;

fn http_backend(
    config: &JokeServiceConfig,
    model_path: &str,
    dataset_path: Option<&String>,
) -> Result<Arc<dyn JokeBackend>> {
    let backend = HttpJokeBackend::new(&config.generation_url, model_path, config.params.clone())?
        .with_dataset(dataset_path.cloned());
    Ok(Arc::new(backend))
}

fn dataset_backend(config: &JokeServiceConfig, path: &str) -> Result<Arc<dyn JokeBackend>> {
    Ok(Arc::new(DatasetJokeBackend::from_path(
        path,
        config.params.max_len,
    )?))
}

/// Validates `config` and builds the single-backend or A/B facade.
///
/// - single, http: first model path
/// - single, dataset: first dataset path
/// - A/B, http: one variant per model path, paired by index with dataset paths
/// - A/B, dataset: one variant per dataset path
pub fn build_joke_service(config: &JokeServiceConfig) -> Result<Arc<dyn JokeService>> {
    config.validate()?;

    if !config.ab_test {
        let backend = match config.backend {
            BackendKind::Http => {
                let model_path = config
                    .model_paths
                    .first()
                    .ok_or_else(|| JokeError::Config("no model path".to_string()))?;
                http_backend(config, model_path, None)?
            }
            BackendKind::Dataset => {
                let path = config
                    .dataset_paths
                    .first()
                    .ok_or_else(|| JokeError::Config("no dataset path".to_string()))?;
                dataset_backend(config, path)?
            }
        };
        info!(backend = %backend.name(), "Using single joke backend");
        return Ok(Arc::new(
            SingleJokeService::new(backend).with_timeout(config.timeout),
        ));
    }

    let variants = match config.backend {
        BackendKind::Http => config
            .model_paths
            .iter()
            .enumerate()
            .map(|(i, model_path)| http_backend(config, model_path, config.dataset_paths.get(i)))
            .collect::<Result<Vec<_>>>()?,
        BackendKind::Dataset => config
            .dataset_paths
            .iter()
            .map(|path| dataset_backend(config, path))
            .collect::<Result<Vec<_>>>()?,
    };
    let names: Vec<&str> = variants.iter().map(|v| v.name()).collect();
    info!(variants = ?names, "Using A/B test joke backends");
    Ok(Arc::new(
        AbTestJokeService::new(variants)?.with_timeout(config.timeout),
    ))
}
