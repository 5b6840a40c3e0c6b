use std::{env, error::Error, sync::Arc};

mod core;
mod error_handler;
mod routes;

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::routes::{
    chat::chat_route::chat, health_route::health, index_route::index, news_route::news,
};

/// Builds the application router around shared state.
///
/// Kept separate from [`start`] so integration tests can drive the router
/// in-process without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    // The original frontend may be hosted separately; allow everything.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/api/chat", post(chat))
        .route("/api/news", get(news))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new("api/static"))
        .layer(cors)
        .with_state(state)
}

pub async fn start() -> Result<(), Box<dyn Error>> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let state = Arc::new(AppState::from_env()?);
    let app = router(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;

    tracing::info!("listening on http://{host_url}");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
