use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, remove_background_handler};
use crate::{config::ServerConfig, error::Result, remover::BackgroundRemover};

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    pub remover: Arc<dyn BackgroundRemover>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, remover: Arc<dyn BackgroundRemover>) -> Self {
        Self {
            remover,
            config: Arc::new(config),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/remove-bg", post(remove_background_handler))
        .route("/health", get(health_handler))
        // Uploads are forwarded whatever their size.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn start_server(config: ServerConfig, remover: Arc<dyn BackgroundRemover>) -> Result<()> {
    config.validate()?;
    let addr = config.socket_addr()?;
    let app = create_app(AppState::new(config, remover));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Background removal server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
