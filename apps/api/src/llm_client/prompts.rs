// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to every prompt whose output is rendered straight into the UI.
pub const MARKDOWN_OUTPUT_INSTRUCTION: &str = "\
    Format your answer as GitHub-flavored Markdown with short headings and bullet lists. \
    Do not wrap the whole answer in a code fence.";

/// Appends the shared output-format fragment to a service prompt.
pub fn with_output_format(prompt: String) -> String {
    format!("{prompt}\n\n{MARKDOWN_OUTPUT_INSTRUCTION}")
}
