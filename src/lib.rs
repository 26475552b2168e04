//! Voicemark — spoken-transcript to structured-markup/code correction.
//!
//! Converts a raw speech-recognition transcript into syntactically valid
//! Markdown or code: detect an active voice mode, rewrite spoken
//! punctuation/keywords into symbols, optionally invoke a language model for
//! harder cases, and normalize the result.
//!
//! # Modules
//!
//! * [`mode`] — voice-mode catalog, trigger detection, shared mode state.
//! * [`rewrite`] — deterministic pre/postprocessing and the spoken-symbol
//!   fallback corrector.
//! * [`llm`] — the LLM correction boundary: trait, REST adapter, prompt
//!   templates, response sanitization.
//! * [`pipeline`] — the orchestrator and the transcription result types.
//! * [`config`] — settings structs and TOML persistence.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use voicemark::config::AppConfig;
//! use voicemark::llm::{ApiCorrector, LlmCorrector};
//! use voicemark::mode::new_shared_mode_state;
//! use voicemark::pipeline::{CorrectionContext, CorrectionPipeline, TranscriptionResult};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let llm: Arc<dyn LlmCorrector> = Arc::new(ApiCorrector::from_config(&config.llm));
//!     let pipeline = CorrectionPipeline::new(new_shared_mode_state(), llm);
//!
//!     let input = TranscriptionResult::new("markdown mode heading one Shopping");
//!     let ctx = CorrectionContext { is_dev_app: true };
//!     let result = pipeline.process(input, ctx, &config.correction).await;
//!     assert_eq!(result.text, "# Shopping");
//! }
//! ```

pub mod config;
pub mod llm;
pub mod mode;
pub mod pipeline;
pub mod rewrite;
