//! Static catalog of voice modes.
//!
//! A [`VoiceMode`] names the target syntax the user is dictating into
//! (plain text, Markdown, or a programming language).  Each mode carries its
//! activation trigger phrases, a display name for the UI/log output, and a
//! flag selecting whether the spoken-symbol fallback applies.
//!
//! The catalog is defined once as [`MODES`] and is immutable for the process
//! lifetime.  Deactivation phrases are shared across all modes ([`OFF_TRIGGERS`]).

// ---------------------------------------------------------------------------
// VoiceMode
// ---------------------------------------------------------------------------

/// The closed set of dictation targets.
///
/// `None` is the plain-text default: transcripts pass through with minimal
/// cleanup.  `Markdown` rewrites spoken markup vocabulary but needs no
/// spoken-symbol conversion.  The programming modes additionally convert
/// spoken operator/delimiter phrases into literal symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceMode {
    /// Plain text — no markup or symbol rewriting.
    None,
    /// Markdown documents (headings, emphasis, links, code fences).
    Markdown,
    /// Python source code.
    Python,
    /// JavaScript source code.
    JavaScript,
    /// Shell commands and scripts.
    Shell,
}

impl Default for VoiceMode {
    fn default() -> Self {
        VoiceMode::None
    }
}

impl VoiceMode {
    /// Registry entry for this mode.
    pub fn spec(&self) -> &'static ModeSpec {
        MODES
            .iter()
            .find(|s| s.mode == *self)
            .unwrap_or(&PLAIN_SPEC)
    }

    /// Short human-readable name for log/status output.
    pub fn display_name(&self) -> &'static str {
        self.spec().display_name
    }

    /// Whether the spoken-symbol fallback corrector applies in this mode.
    ///
    /// `None` and `Markdown` never require symbol conversion; all
    /// programming modes do.
    pub fn requires_symbol_conversion(&self) -> bool {
        self.spec().requires_symbol_conversion
    }
}

// ---------------------------------------------------------------------------
// ModeSpec
// ---------------------------------------------------------------------------

/// One registry entry: a mode plus its static attributes.
#[derive(Debug)]
pub struct ModeSpec {
    /// The mode this entry describes.
    pub mode: VoiceMode,
    /// Activation phrases, lowercase.  Matched as utterance prefix or exact
    /// utterance by the detector.
    pub triggers: &'static [&'static str],
    /// Display name for UI/log output.
    pub display_name: &'static str,
    /// Whether the spoken-symbol fallback corrector applies.
    pub requires_symbol_conversion: bool,
}

/// Entry for `VoiceMode::None`.  Kept out of [`MODES`] because plain mode is
/// entered through the off-phrases, never through an activation trigger.
static PLAIN_SPEC: ModeSpec = ModeSpec {
    mode: VoiceMode::None,
    triggers: &[],
    display_name: "Plain Text",
    requires_symbol_conversion: false,
};

// ---------------------------------------------------------------------------
// Static registry
// ---------------------------------------------------------------------------

/// Activation registry, in priority order.
///
/// Trigger phrases must be lowercase and unique across all entries; the
/// detector resolves overlapping prefixes by longest match, then by the
/// order of this slice.
pub static MODES: &[ModeSpec] = &[
    ModeSpec {
        mode: VoiceMode::Markdown,
        // "markdown" alone also activates; the detector's longest-match rule
        // keeps it from shadowing the longer phrasings.
        triggers: &["markdown mode", "markdown on", "start markdown", "markdown"],
        display_name: "Markdown",
        requires_symbol_conversion: false,
    },
    ModeSpec {
        mode: VoiceMode::Python,
        triggers: &["python mode", "python on", "start python"],
        display_name: "Python",
        requires_symbol_conversion: true,
    },
    ModeSpec {
        mode: VoiceMode::JavaScript,
        triggers: &["javascript mode", "javascript on", "js mode"],
        display_name: "JavaScript",
        requires_symbol_conversion: true,
    },
    ModeSpec {
        mode: VoiceMode::Shell,
        triggers: &["shell mode", "bash mode", "terminal mode"],
        display_name: "Shell",
        requires_symbol_conversion: true,
    },
];

/// Deactivation phrases, lowercase.  Any of these returns the pipeline to
/// [`VoiceMode::None`] regardless of the currently active mode.
pub static OFF_TRIGGERS: &[&str] = &[
    "markdown off",
    "mode off",
    "disable mode",
    "voice mode off",
    "plain text mode",
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
