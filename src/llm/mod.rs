//! LLM correction boundary.
//!
//! This module provides:
//! * [`LlmCorrector`] — async trait implemented by all corrector backends
//!   (`available()` precondition + `correct(text, template)`).
//! * [`ApiCorrector`] — OpenAI-compatible REST API corrector.
//! * [`PromptTemplate`] / [`template_for`] — one fixed prompt per voice mode.
//! * [`sanitize_response`] — mandatory cleanup/validation of model output.
//! * [`LlmError`] — error variants for LLM operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use voicemark::config::AppConfig;
//! use voicemark::llm::{sanitize_response, template_for, ApiCorrector, LlmCorrector};
//! use voicemark::mode::VoiceMode;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let corrector = ApiCorrector::from_config(&config.llm);
//!
//!     let text = "x equals 1";
//!     let template = template_for(VoiceMode::Python);
//!     if corrector.available() {
//!         if let Ok(raw) = corrector.correct(text, template).await {
//!             if let Ok(clean) = sanitize_response(&raw, text) {
//!                 println!("{clean}");
//!             }
//!         }
//!     }
//! }
//! ```

pub mod corrector;
pub mod prompt;
pub mod sanitize;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use corrector::{ApiCorrector, LlmCorrector, LlmError};
pub use prompt::{template_for, PromptTemplate};
pub use sanitize::sanitize_response;

#[cfg(test)]
pub use corrector::MockCorrector;
