//! HTTP surface of the support chat backend.
//!
//! Routes:
//! - `POST /api/chat`      — grounded assistant reply
//! - `GET  /api/health`     — liveness
//! - `GET  /api/health/llm` — Ollama readiness probe

use std::{env, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;

mod core;
mod error_handler;
mod routes;

pub use error_handler::{AppError, AppResult};

use crate::core::app_state::AppState;
use crate::routes::{
    chat::chat_route::chat,
    health::health_route::{health, llm_health},
};

/// Builds the application router around shared state.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/health", get(health))
        .route("/api/health/llm", get(llm_health))
        .with_state(state)
}

/// Starts the HTTP server and blocks until shutdown.
///
/// Reads `API_ADDRESS` (e.g. `0.0.0.0:8080`) and serves with graceful
/// shutdown on Ctrl+C.
///
/// # Errors
/// Returns [`AppError`] when the env/config is invalid, the listener cannot
/// be bound, or the server fails.
pub async fn start() -> Result<(), AppError> {
    let host_url = env::var("API_ADDRESS").map_err(|_| AppError::MissingEnv("API_ADDRESS"))?;

    let state = Arc::new(AppState::from_env()?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    tracing::info!(%host_url, "support chat API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
