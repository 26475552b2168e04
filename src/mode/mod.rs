//! Voice-mode catalog, trigger detection, and shared mode state.
//!
//! This module provides:
//! * [`VoiceMode`] — closed enum of dictation targets (plain / Markdown /
//!   programming languages).
//! * [`MODES`] / [`OFF_TRIGGERS`] — the static trigger-phrase registry.
//! * [`detect`] / [`Detection`] — prefix/exact trigger matching that splits
//!   the spoken command off from the dictated content.
//! * [`SharedModeState`] — the process-wide "currently active mode" cell.
//!
//! # Quick start
//!
//! ```rust
//! use voicemark::mode::{detect, VoiceMode};
//!
//! let d = detect("markdown mode shopping list");
//! assert_eq!(d.mode, Some(VoiceMode::Markdown));
//! assert_eq!(d.remainder, "shopping list");
//!
//! let d = detect("just some words");
//! assert_eq!(d.mode, None);
//! ```

pub mod detector;
pub mod registry;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use detector::{detect, Detection};
pub use registry::{ModeSpec, VoiceMode, MODES, OFF_TRIGGERS};
pub use state::{new_shared_mode_state, SharedModeState};
