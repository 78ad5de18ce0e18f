pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::builder::handlers as builder;
use crate::chat::handlers as chat;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/scores", post(analysis::handle_scores))
        // Career assistant
        .route("/api/v1/chat", post(chat::handle_chat))
        // Resume Builder
        .route("/api/v1/resumes", post(builder::handle_create_resume))
        .route("/api/v1/resumes/:id", get(builder::handle_get_resume))
        .route(
            "/api/v1/resumes/:id/markdown",
            get(builder::handle_get_resume_markdown),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
