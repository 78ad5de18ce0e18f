use serde::Serialize;

use crate::analysis::extractor::Extraction;
use crate::analysis::similarity::SimilarityScore;

/// Gauge band for the keyword score: strong ≥ 80, moderate ≥ 60, weak below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Strong
        } else if score >= 60.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

/// Both numeric scores, rounded to two decimals, plus the keyword breakdown.
/// `similarity` is `null` when no job description was supplied; `keyword` is 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub similarity: SimilarityScore,
    pub keyword: f64,
    pub keyword_band: ScoreBand,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeStatus {
    Ok,
    Failed,
    Skipped,
}

/// A generated text block. On failure `text` holds a user-facing placeholder,
/// so `status` is the only reliable way to tell content from an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narrative {
    pub status: NarrativeStatus,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub critique: Narrative,
    pub courses: Narrative,
}

/// The single object handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct AssembledResult {
    pub extraction: Extraction,
    pub job_description_supplied: bool,
    pub scores: ScoreResult,
    pub report: AnalysisReport,
}
