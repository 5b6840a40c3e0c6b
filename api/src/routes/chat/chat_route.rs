//! POST /api/chat — forwards one user message to the completion service.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Local;
use tracing::debug;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::chat_request::{ChatRequest, ChatResponse},
};

/// Handler: POST /api/chat
///
/// Validates that the message is non-empty after trimming, then performs a
/// single completion call. All failure classes arrive as [`AppError`]
/// variants with their status codes; nothing is retried.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/api/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"什么是数字经济？"}'
/// ```
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    // Rejected before any network call is attempted.
    if body.message.trim().is_empty() {
        return Err(AppError::EmptyMessage);
    }

    debug!(message_len = body.message.len(), "chat request accepted");

    let reply = state.chat.ask(&body.message).await?;

    Ok(Json(ChatResponse {
        response: reply,
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}
