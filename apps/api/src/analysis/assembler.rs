//! Pure aggregation of scores, narratives and extraction provenance.

use crate::analysis::extractor::Extraction;
use crate::analysis::generator::AiError;
use crate::analysis::keywords::keyword_overlap;
use crate::analysis::models::{
    AnalysisReport, AssembledResult, Narrative, NarrativeStatus, ScoreBand, ScoreResult,
};
use crate::analysis::similarity::similarity;

pub const CRITIQUE_UNAVAILABLE: &str =
    "AI analysis failed. The resume was scored, but the written review is unavailable right now.";
pub const COURSES_UNAVAILABLE: &str = "Course suggestions are unavailable right now.";
pub const RESUME_TEXT_MISSING: &str =
    "No text could be read from this resume, so no AI review was requested.";

/// Runs both scorers over the same inputs.
pub fn score_texts(resume_text: &str, job_description: Option<&str>) -> ScoreResult {
    let overlap = keyword_overlap(resume_text, job_description);
    ScoreResult {
        similarity: similarity(resume_text, job_description),
        keyword: overlap.score,
        keyword_band: ScoreBand::from_score(overlap.score),
        matched_keywords: overlap.matched,
        missing_keywords: overlap.missing,
    }
}

/// Maps a generation outcome onto a narrative with an explicit status flag.
pub fn narrative(result: Result<String, AiError>, unavailable: &str) -> Narrative {
    match result {
        Ok(text) => Narrative {
            status: NarrativeStatus::Ok,
            text,
        },
        Err(AiError::InputMissing(_)) => Narrative {
            status: NarrativeStatus::Skipped,
            text: RESUME_TEXT_MISSING.to_string(),
        },
        Err(AiError::Remote(_) | AiError::Timeout(_)) => Narrative {
            status: NarrativeStatus::Failed,
            text: unavailable.to_string(),
        },
    }
}

/// Combines everything into the result handed to the renderer. Sentinels pass
/// through unchanged; "no job description" is read off `NotApplicable`.
pub fn assemble(
    extraction: Extraction,
    scores: ScoreResult,
    report: AnalysisReport,
) -> AssembledResult {
    AssembledResult {
        job_description_supplied: scores.similarity.is_applicable(),
        extraction,
        scores,
        report,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::analysis::extractor::ExtractionStrategy;
    use crate::analysis::similarity::SimilarityScore;
    use crate::llm_client::LlmError;

    fn extraction(text: &str) -> Extraction {
        Extraction {
            text: text.to_string(),
            strategy: ExtractionStrategy::Primary,
            page_count: 1,
            warning: None,
        }
    }

    fn ok_report() -> AnalysisReport {
        AnalysisReport {
            critique: narrative(Ok("Looks solid.".to_string()), CRITIQUE_UNAVAILABLE),
            courses: narrative(Ok("Take a Kubernetes course.".to_string()), COURSES_UNAVAILABLE),
        }
    }

    #[test]
    fn test_no_job_description_is_distinct_from_zero_overlap() {
        let without = assemble(extraction("rust"), score_texts("rust", None), ok_report());
        let disjoint = assemble(
            extraction("rust"),
            score_texts("rust", Some("gardening")),
            ok_report(),
        );

        assert!(!without.job_description_supplied);
        assert_eq!(without.scores.similarity, SimilarityScore::NotApplicable);
        assert_eq!(without.scores.keyword, 0.0);

        assert!(disjoint.job_description_supplied);
        assert_eq!(disjoint.scores.similarity, SimilarityScore::Score(0.0));
        assert_eq!(disjoint.scores.keyword, 0.0);
    }

    #[test]
    fn test_scores_carry_keyword_breakdown() {
        let scores = score_texts("python java sql", Some("Looking for Python and SQL engineer"));
        assert_eq!(scores.keyword, 33.33);
        assert_eq!(scores.keyword_band, ScoreBand::Weak);
        assert_eq!(scores.matched_keywords, vec!["python", "sql"]);
        assert!(scores.similarity.value().unwrap() > 0.0);
    }

    #[test]
    fn test_narrative_maps_each_error_kind() {
        let remote = narrative(
            Err(AiError::Remote(LlmError::EmptyContent)),
            COURSES_UNAVAILABLE,
        );
        assert_eq!(remote.status, NarrativeStatus::Failed);
        assert_eq!(remote.text, COURSES_UNAVAILABLE);

        let timeout = narrative(
            Err(AiError::Timeout(Duration::from_secs(1))),
            CRITIQUE_UNAVAILABLE,
        );
        assert_eq!(timeout.status, NarrativeStatus::Failed);

        let skipped = narrative(Err(AiError::InputMissing("resume text")), CRITIQUE_UNAVAILABLE);
        assert_eq!(skipped.status, NarrativeStatus::Skipped);
        assert_eq!(skipped.text, RESUME_TEXT_MISSING);
    }

    #[test]
    fn test_assembled_json_shape() {
        let result = assemble(extraction("rust"), score_texts("rust", None), ok_report());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["scores"]["similarity"].is_null());
        assert_eq!(json["scores"]["keyword"], 0.0);
        assert_eq!(json["job_description_supplied"], false);
        assert_eq!(json["extraction"]["strategy"], "primary");
        assert_eq!(json["report"]["critique"]["status"], "ok");
    }
}
