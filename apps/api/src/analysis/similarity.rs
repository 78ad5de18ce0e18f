//! Similarity Scorer — TF-IDF cosine similarity between a resume and a job description.
//!
//! The vector space is fitted over exactly the two documents, with the usual
//! vectorizer defaults: lowercase, tokens of two or more word characters, raw
//! counts, smoothed idf `ln((1 + n) / (1 + df)) + 1`, L2-normalized rows.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::analysis::round2;

/// Similarity result. `NotApplicable` (serialized as `null`) means no job
/// description was supplied, which is different from a computed `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimilarityScore {
    NotApplicable,
    Score(f64),
}

impl SimilarityScore {
    pub fn value(&self) -> Option<f64> {
        match self {
            SimilarityScore::NotApplicable => None,
            SimilarityScore::Score(v) => Some(*v),
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, SimilarityScore::Score(_))
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"))
}

/// Scores resume relevance against a job description on a 0–100 scale.
pub fn similarity(resume_text: &str, job_description: Option<&str>) -> SimilarityScore {
    match job_description {
        None => SimilarityScore::NotApplicable,
        Some(job) => {
            let cosine = tf_idf_cosine(resume_text, job);
            SimilarityScore::Score(round2(cosine * 100.0).clamp(0.0, 100.0))
        }
    }
}

fn term_counts(text: &str) -> BTreeMap<String, f64> {
    let lowered = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for token in token_pattern().find_iter(&lowered) {
        *counts.entry(token.as_str().to_string()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine similarity of the two TF-IDF rows. Zero vectors score 0.0.
fn tf_idf_cosine(a: &str, b: &str) -> f64 {
    let counts_a = term_counts(a);
    let counts_b = term_counts(b);
    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    const N_DOCS: f64 = 2.0;
    let idf = |term: &str| {
        let df = [&counts_a, &counts_b]
            .iter()
            .filter(|counts| counts.contains_key(term))
            .count() as f64;
        ((1.0 + N_DOCS) / (1.0 + df)).ln() + 1.0
    };

    let weigh = |counts: &BTreeMap<String, f64>| -> BTreeMap<String, f64> {
        counts.iter().map(|(t, c)| (t.clone(), c * idf(t.as_str()))).collect()
    };
    let weights_a = weigh(&counts_a);
    let weights_b = weigh(&counts_b);

    let norm_a = weights_a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = weights_b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Iterate the smaller map; both are sorted so the sum order is stable.
    let (small, large) = if weights_a.len() <= weights_b.len() {
        (&weights_a, &weights_b)
    } else {
        (&weights_b, &weights_a)
    };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|other| w * other))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
