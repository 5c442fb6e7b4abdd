use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{
    demo_credentials, AppState, CatalogSource, InMemoryProfileRepository, InMemorySessionStore,
};
use crate::routes::with_api_routes;
use stayfinder::auth::{SessionManager, StaticCredentialVerifier};
use stayfinder::config::AppConfig;
use stayfinder::error::AppError;
use stayfinder::profile::ProfileService;
use stayfinder::recommend::RecommendationEngine;
use stayfinder::router::ApiState;
use stayfinder::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let source = CatalogSource::choose(args.catalog.take(), args.catalog_csv.take(), &config.catalog);
    let catalog = source.load()?;
    let hotels = catalog.len();

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let api_state = Arc::new(ApiState {
        catalog,
        engine: RecommendationEngine::default(),
        profiles: ProfileService::new(Arc::new(InMemoryProfileRepository::default())),
        sessions: SessionManager::new(
            Arc::new(StaticCredentialVerifier::new(demo_credentials())),
            Arc::new(InMemorySessionStore::default()),
        ),
    });

    let app = with_api_routes(api_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        catalog = source.label(),
        hotels,
        "stayfinder recommendation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
