//! POST /api/chat — grounded assistant reply for one customer message.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::chat_request::{ChatReply, ChatRequest},
};

/// Handler: POST /api/chat
///
/// Validation lives here, not in the generator: the generator's contract
/// assumes a non-empty message, and it never fails past this point — the
/// handler always answers 200 with a string once validation passed.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"What cruise packages do you offer?"}'
/// ```
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatReply>> {
    let Json(req) = body?;

    if req.message.trim().is_empty() {
        return Err(AppError::BadRequest("Valid message is required".into()));
    }

    // The user message goes to the generator unmodified.
    let response = state.generator.generate_reply(&req.message).await;

    Ok(Json(ChatReply { response }))
}
