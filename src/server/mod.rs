pub mod handlers;
pub mod types;

use crate::{Result, config::Config, gemini::HttpGeminiClient};
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Uncompressed photo payloads can be large; the default axum limit is far
/// too small for them.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub async fn run(config: Config) -> Result<()> {
    // Initialize the Gemini client with the credential read at startup
    let gemini = HttpGeminiClient::new(config.gemini.clone());

    // Create application state
    let app_state = handlers::AppState {
        gemini: Arc::new(gemini),
    };

    // Create router
    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router. Split out of `run` so integration tests
/// can drive it with a mocked Gemini client.
pub fn router(app_state: handlers::AppState) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
