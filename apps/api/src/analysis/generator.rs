//! AI Report Generator — prompt construction over a `TextGenerator`.
//!
//! One attempt per call, bounded by a deadline. Blank input never reaches the
//! remote service. No conversation memory: chat history is supplied by the caller.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info};

use crate::analysis::prompts::{
    CHAT_CONTEXT, COURSES_PROMPT_TEMPLATE, CRITIQUE_PROMPT_TEMPLATE, JD_COMPARISON_TEMPLATE,
};
use crate::chat::models::{ChatRole, ChatTurn};
use crate::llm_client::prompts::with_output_format;
use crate::llm_client::{LlmError, TextGenerator};

#[derive(Debug, Error)]
pub enum AiError {
    #[error("{0} is required")]
    InputMissing(&'static str),

    #[error("remote generation failed: {0}")]
    Remote(#[from] LlmError),

    #[error("remote generation timed out after {0:?}")]
    Timeout(Duration),
}

/// Generation front-end bound to one backend and one deadline.
#[derive(Clone)]
pub struct AiReportGenerator {
    backend: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl AiReportGenerator {
    pub fn new(backend: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Suitability, strengths/weaknesses, enhancements and grammar for a resume,
    /// plus a comparison section when a job description is present.
    pub async fn critique(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<String, AiError> {
        require("resume text", resume_text)?;
        self.generate("critique", critique_prompt(resume_text, job_description))
            .await
    }

    pub async fn suggest_courses(&self, resume_text: &str) -> Result<String, AiError> {
        require("resume text", resume_text)?;
        let prompt = COURSES_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
        self.generate("courses", with_output_format(prompt)).await
    }

    pub async fn chat(&self, message: &str, history: &[ChatTurn]) -> Result<String, AiError> {
        require("message", message)?;
        self.generate("chat", chat_prompt(message, history)).await
    }

    async fn generate(&self, purpose: &str, prompt: String) -> Result<String, AiError> {
        info!("Requesting {purpose} ({} prompt chars)", prompt.len());
        let result = match tokio::time::timeout(self.timeout, self.backend.generate(&prompt)).await
        {
            Ok(Ok(text)) => Ok(text.trim().to_string()),
            Ok(Err(e)) => Err(AiError::Remote(e)),
            Err(_) => Err(AiError::Timeout(self.timeout)),
        };
        if let Err(e) = &result {
            error!("LLM {purpose} failed: {e}");
        }
        result
    }
}

fn require(what: &'static str, text: &str) -> Result<(), AiError> {
    if text.trim().is_empty() {
        return Err(AiError::InputMissing(what));
    }
    Ok(())
}

fn critique_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let mut prompt = CRITIQUE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    if let Some(job) = job_description {
        prompt.push_str("\n\n");
        prompt.push_str(&JD_COMPARISON_TEMPLATE.replace("{job_description}", job));
    }
    with_output_format(prompt)
}

fn chat_prompt(message: &str, history: &[ChatTurn]) -> String {
    let mut prompt = String::from(CHAT_CONTEXT);
    prompt.push_str("\n\n");
    for turn in history {
        let speaker = match turn.role {
            ChatRole::User => "User",
            ChatRole::Assistant => "Assistant",
        };
        prompt.push_str(&format!("{speaker}: {}\n", turn.content.trim()));
    }
    prompt.push_str(&format!("User: {}\nAssistant:", message.trim()));
    prompt
}

/// Deterministic `TextGenerator`s for tests across the crate.
#[cfg(test)]
pub(crate) mod fakes {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, TextGenerator};

    /// Answers every prompt with a fixed reply and records the prompts it saw.
    #[derive(Default)]
    pub struct ScriptedGenerator {
        pub reply: String,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(vec![]),
            }
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    /// Always fails like a 503 from the remote service.
    #[derive(Default)]
    pub struct FailingGenerator {
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            })
        }
    }

    /// Never answers within any reasonable deadline.
    pub struct StalledGenerator;

    #[async_trait]
    impl TextGenerator for StalledGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }
}
