//! Deterministic text rewriting — the rule-based half of the pipeline.
//!
//! This module provides:
//! * [`preprocess`] — ordered spoken-markup rewriting, scoped by mode.
//! * [`normalize_urls`] — spoken-URL vocabulary + fixed-point space cleanup.
//! * [`convert_spoken_symbols`] / [`has_spoken_symbols`] — the always-available
//!   spoken-symbol fallback for programming modes and its heuristic.
//! * [`postprocess`] — final marker merge/cap and whitespace normalization.
//!
//! # Quick start
//!
//! ```rust
//! use voicemark::mode::VoiceMode;
//! use voicemark::rewrite::{convert_spoken_symbols, preprocess};
//!
//! assert_eq!(
//!     preprocess("bold on important bold off", VoiceMode::Markdown),
//!     "**important**"
//! );
//! assert_eq!(convert_spoken_symbols("dash dash verbose"), "--verbose");
//! ```

pub mod postprocess;
pub mod preprocess;
pub mod symbols;
pub mod url;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use postprocess::postprocess;
pub use preprocess::preprocess;
pub use symbols::{convert_spoken_symbols, has_spoken_symbols};
pub use url::normalize_urls;
