use anyhow::Result;
use arc_swap::ArcSwap;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    metrics,
    signals::setup_signal_handlers,
};

/// Start the advisor API server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Sets up signal handlers for graceful shutdown and config reload
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    // Wrap config in ArcSwap for atomic reload support
    let config_swap = Arc::new(ArcSwap::from_pointee(config.clone()));

    let app_state = AppState::new(config_swap.clone());

    let (shutdown_tx, signal_handle) =
        setup_signal_handlers(config_swap.clone(), config_path, app_state.profiles.clone())?;
    let mut shutdown_rx = shutdown_tx.subscribe();
    let app = create_router(&config, app_state, metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting AI Cost Advisor on {}", addr);
    info!(
        advisor_enabled = config.advisor.enabled,
        metrics_enabled = config.metrics.enabled,
        profiles = config.profiles.len(),
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    config: &Config,
    app_state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
) -> Router {
    let api_routes = Router::new()
        .route("/v1/estimate", post(handlers::estimate::handle_estimate))
        .route(
            "/v1/estimate/fixed",
            post(handlers::estimate::handle_fixed_estimate),
        )
        .route("/v1/catalog", get(handlers::catalog::list_catalog))
        .route(
            "/v1/users/:user_id/connections",
            get(handlers::connections::list_connections),
        )
        .route(
            "/v1/users/:user_id/connections/:service",
            post(handlers::connections::connect_service)
                .delete(handlers::connections::disconnect_service),
        )
        .route(
            "/v1/users/:user_id/dashboard",
            get(handlers::dashboard::account_dashboard),
        )
        .route("/v1/demo/dashboard", get(handlers::dashboard::demo_dashboard))
        .route("/v1/advisor/chat", post(handlers::advisor::handle_chat))
        .route("/v1/contact", post(handlers::contact::submit_contact))
        .with_state(app_state);

    let mut router = Router::new().route("/health", get(handlers::health::health_check));

    if let Some(handle) = metrics_handle {
        router = router.merge(
            Router::new()
                .route(
                    &config.metrics.endpoint,
                    get(handlers::metrics_handler::metrics),
                )
                .with_state(handle),
        );
    }

    router
        .merge(api_routes)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
