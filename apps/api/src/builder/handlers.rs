//! Axum route handlers for the Resume Builder.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::builder::models::{ResumeRecord, StoredResume};
use crate::builder::render::render_markdown;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<(StatusCode, Json<StoredResume>), AppError> {
    let record = record.normalized().map_err(AppError::Validation)?;
    let stored = state.resumes.save(record).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredResume>, AppError> {
    Ok(Json(state.resumes.load(id).await?))
}

/// GET /api/v1/resumes/:id/markdown
pub async fn handle_get_resume_markdown(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let stored = state.resumes.load(id).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_markdown(&stored.resume),
    ))
}
