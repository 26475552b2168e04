//! Transcription result and per-invocation context types.
//!
//! [`TranscriptionResult`] is the value the ASR collaborator hands to the
//! pipeline and the value the pipeline hands back.  Correction never mutates
//! the input — [`TranscriptionResult::with_correction`] produces a derived
//! copy carrying the corrected text plus the pre-correction original.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TranscriptionResult
// ---------------------------------------------------------------------------

/// One completed transcription, possibly corrected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Transcript text (corrected text once `was_corrected` is set).
    pub text: String,

    /// ASR confidence for the utterance, when the engine reports one.
    pub confidence: Option<f32>,

    /// Wall-clock time the ASR inference took.
    pub processing_time: Duration,

    /// Whether the correction pipeline changed the text.
    pub was_corrected: bool,

    /// The pre-correction text.  Present only when `was_corrected` is true.
    pub original_text: Option<String>,
}

impl TranscriptionResult {
    /// An uncorrected result carrying only `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
            processing_time: Duration::ZERO,
            was_corrected: false,
            original_text: None,
        }
    }

    /// Derived copy marked as corrected.
    ///
    /// `text` becomes `corrected`, the previous text moves into
    /// `original_text`, and confidence/timing carry over unchanged.  The
    /// input value is not mutated.
    pub fn with_correction(&self, corrected: String) -> Self {
        Self {
            text: corrected,
            confidence: self.confidence,
            processing_time: self.processing_time,
            was_corrected: true,
            original_text: Some(self.text.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// CorrectionContext
// ---------------------------------------------------------------------------

/// Per-invocation facts about the correction target.  Not persisted.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionContext {
    /// Whether the foreground target is a developer-oriented application.
    /// Correction only applies when true.
    pub is_dev_app: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
