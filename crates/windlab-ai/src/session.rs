//! Analysis session: prompt flow and conversation history.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::PromptStyle;
use crate::ollama::{InferenceError, OllamaClient};
use crate::prompt::{self, PROBE_PROMPT};

/// Seam between the session and the inference service, so tests can inject
/// a scripted backend instead of a live server.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        OllamaClient::generate(self, prompt).await
    }
}

/// One question/response pair in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub question: String,
    pub response: String,
}

/// Explicit session state for one UI lifetime: the rendered dataset summary,
/// an inference backend, and the append-only conversation history.
///
/// One logical request at a time; history is appended only by the single
/// active flow, so no synchronization is needed.
pub struct AnalysisSession<B> {
    backend: B,
    style: PromptStyle,
    summary_text: String,
    history: Vec<ConversationEntry>,
}

impl<B: InferenceBackend> AnalysisSession<B> {
    /// Create a session over a backend and the summary text it should ground
    /// every answer in.
    pub fn new(backend: B, style: PromptStyle, summary_text: impl Into<String>) -> Self {
        Self {
            backend,
            style,
            summary_text: summary_text.into(),
            history: Vec::new(),
        }
    }

    /// Compose the prompt for a question and send it to the backend.
    ///
    /// Does not record anything; callers append to the history once they
    /// have decided what to display (see [`Self::push`]).
    pub async fn ask(&self, question: &str) -> Result<String, InferenceError> {
        info!("asking: {}", question);
        let prompt = prompt::compose(self.style, &self.summary_text, question);
        debug!("prompt is {} chars", prompt.len());
        self.backend.generate(&prompt).await
    }

    /// Connectivity probe with a fixed trivial prompt, classified exactly
    /// like a real question.
    pub async fn ping(&self) -> Result<String, InferenceError> {
        self.backend.generate(PROBE_PROMPT).await
    }

    /// Append an entry to the conversation history.
    pub fn push(&mut self, entry: ConversationEntry) {
        self.history.push(entry);
    }

    /// History entries, newest first.
    pub fn history(&self) -> impl Iterator<Item = &ConversationEntry> {
        self.history.iter().rev()
    }

    /// The summary text this session grounds its prompts in.
    pub fn summary_text(&self) -> &str {
        &self.summary_text
    }
}
