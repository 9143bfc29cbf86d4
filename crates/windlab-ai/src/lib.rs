//! # Windlab AI
//!
//! Prompt composition and local LLM inference for the wind tunnel data
//! explorer.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │   Question   │ --> │ AnalysisSession  │ --> │  OllamaClient   │
//! │  + Summary   │     │ (prompt+history) │     │ (/api/generate) │
//! └──────────────┘     └──────────────────┘     └─────────────────┘
//! ```
//!
//! The session composes a prompt from the dataset summary and the user's
//! question, sends it through an [`InferenceBackend`], and classifies every
//! failure into [`InferenceError`] so the UI can always render something
//! readable. No failure crashes the caller; no call is retried
//! automatically.
//!
//! ## Usage
//!
//! ```ignore
//! use windlab_ai::{AnalysisSession, GenConfig, OllamaClient};
//!
//! let config = GenConfig::verbose();
//! let client = OllamaClient::new(config.clone());
//! let mut session = AnalysisSession::new(client, config.style, summary_text);
//!
//! let answer = session.ask("What AoA gives max lift?").await?;
//! ```

mod config;
mod ollama;
pub mod prompt;
mod session;

pub use config::{GenConfig, GenConfigBuilder, PromptStyle};
pub use ollama::{InferenceError, OllamaClient, DEFAULT_OLLAMA_URL, ERROR_BODY_LIMIT};
pub use session::{AnalysisSession, ConversationEntry, InferenceBackend};
