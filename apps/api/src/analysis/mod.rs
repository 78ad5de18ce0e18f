// Resume analysis: PDF extraction, similarity + keyword scoring, AI critique, assembly.
// All LLM calls go through the TextGenerator capability; no vendor types leak in here.

pub mod assembler;
pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod similarity;
pub mod upload;

/// Rounds a 0–100 score to two decimal places, ties to even.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
