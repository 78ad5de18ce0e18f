//! Keyword overlap scoring, an ATS-style approximation.
//!
//! Score = |job tokens ∩ resume tokens| / |job tokens| × 100, over distinct
//! case-folded `\w+` runs. Frequency and position do not matter.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::analysis::round2;

/// Overlap score plus the keywords behind it, sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordOverlap {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordOverlap {
    fn empty() -> Self {
        Self {
            score: 0.0,
            matched: vec![],
            missing: vec![],
        }
    }
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

fn distinct_tokens(text: &str) -> BTreeSet<String> {
    word_pattern()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// 0–100 keyword score. A missing or empty job description scores exactly 0.
/// The HTTP layer reports the full `keyword_overlap` instead.
#[allow(dead_code)]
pub fn keyword_score(resume_text: &str, job_description: Option<&str>) -> f64 {
    keyword_overlap(resume_text, job_description).score
}

pub fn keyword_overlap(resume_text: &str, job_description: Option<&str>) -> KeywordOverlap {
    let Some(job) = job_description.filter(|j| !j.is_empty()) else {
        return KeywordOverlap::empty();
    };

    let job_keywords = distinct_tokens(job);
    if job_keywords.is_empty() {
        return KeywordOverlap::empty();
    }
    let resume_tokens = distinct_tokens(resume_text);

    let (matched, missing): (Vec<String>, Vec<String>) = job_keywords
        .iter()
        .cloned()
        .partition(|kw| resume_tokens.contains(kw));

    let score = round2(matched.len() as f64 / job_keywords.len() as f64 * 100.0);

    KeywordOverlap {
        score,
        matched,
        missing,
    }
}
