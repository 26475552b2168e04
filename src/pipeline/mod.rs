//! Pipeline orchestrator module.
//!
//! This module wires mode detection, deterministic rewriting, LLM/rule-based
//! correction and postprocessing into the one call boundary the surrounding
//! application uses.
//!
//! # Architecture
//!
//! ```text
//! TranscriptionResult + CorrectionContext + CorrectionConfig
//!        │
//!        ▼
//! CorrectionPipeline::process()  ← async, serialized on the mode mutex
//!        │
//!        ├─ mode::detect        → may update SharedModeState
//!        ├─ rewrite::preprocess → spoken markup → literal symbols
//!        ├─ llm / rewrite::symbols (policy-gated, failures recovered)
//!        └─ rewrite::postprocess
//!        │
//!        ▼
//! TranscriptionResult (was_corrected / original_text filled in)
//! ```
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
//!     let input = TranscriptionResult::new("markdown mode bold on hi bold off");
//!     let ctx = CorrectionContext { is_dev_app: true };
//!     let result = pipeline.process(input, ctx, &config.correction).await;
//!     println!("{}", result.text);
//! }
//! ```

pub mod result;
pub mod runner;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use result::{CorrectionContext, TranscriptionResult};
pub use runner::CorrectionPipeline;
