//! Router construction and startup.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // API v1
        .nest("/api/v1", api_v1_routes())
        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes.
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        // Curves
        .route("/curves/bootstrap", post(routes::curves::bootstrap))
        .route("/curves/splice/swap", post(routes::curves::splice_swap))
        .route("/curves/splice/fra", post(routes::curves::splice_fra))
        .route("/curves/forward", post(routes::curves::forward))
        // FRA
        .route("/fra/payoff", post(routes::fra::payoff))
        .route("/fra/valuation", post(routes::fra::valuation))
        .route("/fra/break-even", post(routes::fra::break_even))
        // Rates and bonds
        .route("/rates/convert", post(routes::rates::convert))
        .route("/bonds/price", post(routes::rates::bond_price))
        // Tool catalog
        .route("/tools", get(routes::tools::list))
        .route("/tools/{tool_key}", post(routes::tools::run))
}

/// Run the server until Ctrl+C.
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let export_dir = state.config.export_dir.clone();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Tenor server listening on http://{}", addr);
    tracing::info!("Exports are written to {}", export_dir.display());
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/curves/bootstrap");
    tracing::info!("  POST /api/v1/curves/splice/{{swap,fra}}");
    tracing::info!("  POST /api/v1/curves/forward");
    tracing::info!("  POST /api/v1/fra/{{payoff,valuation,break-even}}");
    tracing::info!("  POST /api/v1/rates/convert");
    tracing::info!("  POST /api/v1/bonds/price");
    tracing::info!("  GET  /api/v1/tools");
    tracing::info!("  POST /api/v1/tools/{{tool_key}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
