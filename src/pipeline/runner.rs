//! Pipeline orchestrator — drives the full transcript → corrected-text chain.
//!
//! [`CorrectionPipeline`] owns a handle to the shared mode cell and an
//! `Arc<dyn LlmCorrector>`, and exposes one call:
//! [`process`](CorrectionPipeline::process).
//!
//! # Pipeline flow
//!
//! ```text
//! TranscriptionResult
//!   ├─ guard: !is_dev_app or correction disabled → return input unchanged
//!   ├─ mode::detect  → may update the shared mode, strips the trigger
//!   │     └─ empty remainder → empty corrected result (mode-only utterance)
//!   ├─ rewrite::preprocess(text, mode)
//!   ├─ [mode != None] LLM (policy-gated, sanitized)  or  spoken-symbol rules
//!   ├─ rewrite::postprocess(text, mode)
//!   └─ changed vs input? → with_correction(final) : input unchanged
//! ```
//!
//! LLM errors never leave this module: every failure path falls back to the
//! rule-based corrector (or a no-op for Markdown) and is logged at `warn`.

use std::sync::Arc;

use crate::config::CorrectionConfig;
use crate::llm::{sanitize_response, template_for, LlmCorrector};
use crate::mode::{detect, SharedModeState, VoiceMode};
use crate::rewrite::{convert_spoken_symbols, has_spoken_symbols, postprocess, preprocess};

use super::result::{CorrectionContext, TranscriptionResult};

// ---------------------------------------------------------------------------
// CorrectionPipeline
// ---------------------------------------------------------------------------

/// Sequences mode detection, deterministic rewriting, correction and cleanup.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use voicemark::config::AppConfig;
/// use voicemark::llm::{ApiCorrector, LlmCorrector};
/// use voicemark::mode::new_shared_mode_state;
/// use voicemark::pipeline::{CorrectionContext, CorrectionPipeline, TranscriptionResult};
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let llm: Arc<dyn LlmCorrector> = Arc::new(ApiCorrector::from_config(&config.llm));
/// let pipeline = CorrectionPipeline::new(new_shared_mode_state(), llm);
///
/// let input = TranscriptionResult::new("markdown mode heading one notes");
/// let ctx = CorrectionContext { is_dev_app: true };
/// let result = pipeline.process(input, ctx, &config.correction).await;
/// assert_eq!(result.text, "# notes");
/// # }
/// ```
pub struct CorrectionPipeline {
    mode_state: SharedModeState,
    llm: Arc<dyn LlmCorrector>,
}

impl CorrectionPipeline {
    /// Create a pipeline over an existing mode cell and corrector backend.
    pub fn new(mode_state: SharedModeState, llm: Arc<dyn LlmCorrector>) -> Self {
        Self { mode_state, llm }
    }

    // -----------------------------------------------------------------------
    // process
    // -----------------------------------------------------------------------

    /// Run one transcript through the pipeline.
    ///
    /// Never fails outward: the worst case is the input coming back with less
    /// correction applied.  The mode mutex is held for the whole invocation,
    /// including the LLM await, so concurrent invocations serialize.
    pub async fn process(
        &self,
        input: TranscriptionResult,
        ctx: CorrectionContext,
        config: &CorrectionConfig,
    ) -> TranscriptionResult {
        if !ctx.is_dev_app || !config.dev_correction_enabled {
            return input;
        }

        let mut mode_guard = self.mode_state.lock().await;

        let detection = detect(&input.text);
        let text = match detection.mode {
            Some(new_mode) => {
                if *mode_guard != new_mode {
                    log::info!(
                        "pipeline: mode {} → {}",
                        mode_guard.display_name(),
                        new_mode.display_name()
                    );
                }
                *mode_guard = new_mode;

                // Mode-only utterance: the state change is the whole effect.
                if detection.remainder.trim().is_empty() {
                    return input.with_correction(String::new());
                }
                detection.remainder
            }
            None => detection.remainder,
        };

        let mode = *mode_guard;
        let text = preprocess(&text, mode);

        let text = if mode == VoiceMode::None {
            text
        } else {
            self.correct(text, mode, config).await
        };

        let final_text = postprocess(&text, mode);
        drop(mode_guard);

        if final_text != input.text {
            input.with_correction(final_text)
        } else {
            input
        }
    }

    // -----------------------------------------------------------------------
    // Correction strategy
    // -----------------------------------------------------------------------

    /// LLM-or-rules decision tree for non-plain modes.
    ///
    /// The LLM runs iff it is enabled, available, and either always-apply is
    /// on or the text carries spoken-symbol phrases.  Any adapter or
    /// sanitization failure — and the not-invoked case — falls through to the
    /// rule-based corrector when the mode requires symbol conversion.
    async fn correct(&self, text: String, mode: VoiceMode, config: &CorrectionConfig) -> String {
        if config.llm_correction_enabled {
            let wants_llm = config.llm_always_apply || has_spoken_symbols(&text);

            if wants_llm && self.llm.available() {
                match self.llm.correct(&text, template_for(mode)).await {
                    Ok(raw) => match sanitize_response(&raw, &text) {
                        Ok(clean) => return clean,
                        Err(e) => {
                            log::warn!("pipeline: LLM response rejected ({e}), falling back");
                        }
                    },
                    Err(e) => {
                        log::warn!("pipeline: LLM correction failed ({e}), falling back");
                    }
                }
            }
        }

        if mode.requires_symbol_conversion() {
            convert_spoken_symbols(&text)
        } else {
            text
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
