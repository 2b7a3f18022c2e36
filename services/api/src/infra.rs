use bridge17::config::AppConfig;
use bridge17::error::AppError;
use bridge17::workflows::dataset::DatasetLoader;
use bridge17::workflows::partnership::PartnershipEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::service::PartnershipService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the dataset named by `data_dir` (or the configured directory) into a fresh service.
pub(crate) fn load_service(
    config: &AppConfig,
    data_dir: Option<PathBuf>,
) -> Result<PartnershipService, AppError> {
    let dir = data_dir.unwrap_or_else(|| config.data.dir.clone());
    let dataset = DatasetLoader::from_dir(dir)?;
    let engine = PartnershipEngine::new(config.scoring.clone());
    Ok(PartnershipService::new(dataset, engine))
}
