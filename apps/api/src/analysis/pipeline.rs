//! Analysis pipeline: one request, end to end.
//!
//! Flow: extract → { similarity, keyword overlap, critique, courses } → assemble.
//!
//! The four producers share only the extracted text, so they run concurrently
//! under `tokio::join!`; assembly waits for all of them. Each generator call is
//! bounded by the configured deadline. Dropping the returned future abandons any
//! in-flight remote call; no state outlives the request.

use std::path::Path;

use tracing::{info, warn};

use crate::analysis::assembler::{
    assemble, narrative, score_texts, COURSES_UNAVAILABLE, CRITIQUE_UNAVAILABLE,
};
use crate::analysis::extractor::{extract_file, Extraction};
use crate::analysis::generator::AiReportGenerator;
use crate::analysis::models::{AnalysisReport, AssembledResult};

/// Analyzes a spooled PDF on disk.
pub async fn analyze_document(
    generator: &AiReportGenerator,
    document: &Path,
    job_description: Option<&str>,
) -> AssembledResult {
    let extraction = extract_file(document).await;
    if extraction.is_failed() {
        warn!("Continuing analysis with empty resume text");
    }
    analyze_extraction(generator, extraction, job_description).await
}

/// Scores and reviews already-extracted text.
pub async fn analyze_extraction(
    generator: &AiReportGenerator,
    extraction: Extraction,
    job_description: Option<&str>,
) -> AssembledResult {
    let resume_text = extraction.text.as_str();

    let (scores, critique, courses) = tokio::join!(
        async { score_texts(resume_text, job_description) },
        generator.critique(resume_text, job_description),
        generator.suggest_courses(resume_text),
    );

    info!(
        "Analysis complete: similarity={:?}, keyword={}",
        scores.similarity.value(),
        scores.keyword
    );

    let report = AnalysisReport {
        critique: narrative(critique, CRITIQUE_UNAVAILABLE),
        courses: narrative(courses, COURSES_UNAVAILABLE),
    };

    assemble(extraction, scores, report)
}
