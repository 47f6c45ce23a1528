//! GET /api/health — liveness; GET /api/health/llm — Ollama readiness.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde_json::{Value, json};

use assistant_llm_service::health_service::HealthStatus;

use crate::core::app_state::AppState;

/// Handler: GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Handler: GET /api/health/llm
///
/// Best-effort probe of the generation endpoint. Always answers 200; the
/// probe result is carried in the body (`ok`, latency, message).
pub async fn llm_health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(state.health.check(&state.llm_config).await)
}
