use crate::config::AppConfig;
use crate::error::AppError;
use crate::service::cli::ServeArgs;
use crate::service::infra::AppState;
use crate::service::routes::router;
use crate::telemetry;
use crate::workflows::career::PredictionEngine;
use axum_prometheus::PrometheusMetricLayer;
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
    let state = AppState::new(PredictionEngine::default(), prometheus_handle);

    let app = router(state.clone(), config.server.body_limit_bytes).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    state.mark_ready();

    info!(?config.environment, %addr, "career prediction service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
