use crate::analysis::generator::AiReportGenerator;
use crate::builder::store::ResumeStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data: every analysis and chat call is isolated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Critique and course suggestions (GEMINI_MODEL).
    pub analyzer: AiReportGenerator,
    /// Career assistant chat (CHAT_MODEL).
    pub assistant: AiReportGenerator,
    pub resumes: ResumeStore,
}
