//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::assembler::score_texts;
use crate::analysis::models::{AssembledResult, ScoreResult};
use crate::analysis::pipeline::analyze_document;
use crate::analysis::upload::{spool_field, SpooledUpload};
use crate::errors::AppError;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub job_description_supplied: bool,
    pub scores: ScoreResult,
}

/// A blank textarea means "no job description", not "an empty one".
fn normalize_job_description(raw: Option<String>) -> Option<String> {
    raw.filter(|jd| !jd.trim().is_empty())
}

/// POST /api/v1/analyze
///
/// Multipart: `resume` (PDF file, required), `job_description` (text, optional).
/// Always answers with a complete result; extraction and AI failures show up as
/// warnings and narrative status flags, not as error responses.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AssembledResult>, AppError> {
    let mut upload: Option<SpooledUpload> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_FIELD => {
                if let Some(previous) = upload.replace(spool_field(field).await?) {
                    previous.remove();
                }
            }
            JOB_DESCRIPTION_FIELD => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?;
                job_description = Some(text);
            }
            other => debug!("Ignoring multipart field '{other}'"),
        }
    }

    let upload = upload
        .ok_or_else(|| AppError::Validation("Missing 'resume' PDF upload".to_string()))?;
    if !upload.looks_like_pdf() {
        upload.remove();
        return Err(AppError::Validation("Only PDF resumes are supported".to_string()));
    }

    let job_description = normalize_job_description(job_description);
    info!(
        "Analyzing resume upload ({} bytes, job description: {})",
        upload.size_bytes(),
        job_description.is_some()
    );

    let result =
        analyze_document(&state.analyzer, upload.path(), job_description.as_deref()).await;
    upload.remove();

    Ok(Json(result))
}

/// POST /api/v1/scores
///
/// Rescores already-extracted text without calling the LLM.
pub async fn handle_scores(Json(request): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let job_description = normalize_job_description(request.job_description);
    let scores = score_texts(&request.resume_text, job_description.as_deref());
    Json(ScoreResponse {
        job_description_supplied: scores.similarity.is_applicable(),
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_job_description_is_absent() {
        assert_eq!(normalize_job_description(None), None);
        assert_eq!(normalize_job_description(Some("  \n\t".to_string())), None);
        assert_eq!(
            normalize_job_description(Some(" Rust ".to_string())).as_deref(),
            Some(" Rust ")
        );
    }

    #[tokio::test]
    async fn test_scores_handler_without_job_description() {
        let Json(response) = handle_scores(Json(ScoreRequest {
            resume_text: "python java sql".to_string(),
            job_description: Some(String::new()),
        }))
        .await;
        assert!(!response.job_description_supplied);
        assert_eq!(response.scores.keyword, 0.0);
        assert!(response.scores.similarity.value().is_none());
    }

    #[tokio::test]
    async fn test_scores_handler_with_job_description() {
        let Json(response) = handle_scores(Json(ScoreRequest {
            resume_text: "python java sql".to_string(),
            job_description: Some("Looking for Python and SQL engineer".to_string()),
        }))
        .await;
        assert!(response.job_description_supplied);
        assert_eq!(response.scores.keyword, 33.33);
    }
}
