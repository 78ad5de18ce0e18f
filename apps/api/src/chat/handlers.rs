//! Axum route handlers for the career assistant.

use axum::{extract::State, Json};

use crate::analysis::assembler::narrative;
use crate::chat::models::{ChatRequest, ChatResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// Shown in place of a reply when the remote service fails or times out.
pub const ASSISTANT_UNAVAILABLE: &str = "I apologize, but I'm having trouble connecting to the \
    AI service. Please try again in a moment.";

/// POST /api/v1/chat
///
/// A blank message is a client error. Remote failures still answer 200 with the
/// apology text and `status: failed`, so the chat window keeps working.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let result = state.assistant.chat(&request.message, &request.history).await;
    let reply = narrative(result, ASSISTANT_UNAVAILABLE);

    Ok(Json(ChatResponse {
        reply: reply.text,
        status: reply.status,
    }))
}
