//! Shared current-mode cell.
//!
//! The active [`VoiceMode`] outlives individual transcripts: saying
//! "markdown mode" keeps Markdown active for every following utterance until
//! a deactivation phrase arrives.  The cell is shared between the pipeline
//! and whoever wants to display the active mode.
//!
//! [`SharedModeState`] is `Arc<tokio::sync::Mutex<VoiceMode>>` — the pipeline
//! holds the guard across its LLM await, so this must be the tokio mutex,
//! not `std::sync::Mutex`.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::registry::VoiceMode;

/// Thread-safe handle to the active mode.  Cheap to clone.
pub type SharedModeState = Arc<Mutex<VoiceMode>>;

/// Construct a fresh mode cell starting in [`VoiceMode::None`].
pub fn new_shared_mode_state() -> SharedModeState {
    Arc::new(Mutex::new(VoiceMode::None))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
