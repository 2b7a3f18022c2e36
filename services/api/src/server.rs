use crate::cli::ServeArgs;
use crate::infra::{load_service, AppState};
use crate::routes::{partnership_router, with_operational_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bridge17::config::AppConfig;
use bridge17::error::AppError;
use bridge17::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(load_service(&config, None)?);

    let app = with_operational_routes(partnership_router(service))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        data_dir = %config.data.dir.display(),
        selection = config.scoring.selection.label(),
        "partnership engine ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
