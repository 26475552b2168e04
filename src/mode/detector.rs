//! Trigger-phrase detection.
//!
//! [`detect`] scans the start of an utterance for a deactivation phrase or a
//! mode activation trigger and splits the trigger off from the dictated
//! content.  Only utterance prefixes and exact utterances count — a trigger
//! spoken mid-sentence is content, not a command.

use super::registry::{VoiceMode, MODES, OFF_TRIGGERS};

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Result of scanning an utterance for mode triggers.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// `Some(mode)` when a trigger fired (`Some(VoiceMode::None)` for a
    /// deactivation phrase); `None` when the utterance is pure content.
    pub mode: Option<VoiceMode>,
    /// The dictated content after the trigger, original casing preserved.
    /// Empty for exact-trigger utterances and for deactivations.
    pub remainder: String,
}

impl Detection {
    fn mode_change(mode: VoiceMode, remainder: &str) -> Self {
        Self {
            mode: Some(mode),
            remainder: remainder.to_string(),
        }
    }

    fn no_change(text: &str) -> Self {
        Self {
            mode: None,
            remainder: text.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// detect
// ---------------------------------------------------------------------------

/// Detect a mode trigger at the start of `text`.
///
/// Order of checks:
/// 1. Deactivation phrases ([`OFF_TRIGGERS`]), exact or prefix.  First match
///    wins and yields `VoiceMode::None` with an empty remainder.
/// 2. Activation triggers across all of [`MODES`], exact or prefix.  When
///    several triggers match (one trigger a prefix of another), the longest
///    wins; equal lengths resolve by registry order.
/// 3. Otherwise the whole text is content.
///
/// Matching is ASCII case-insensitive against the original text, so the
/// remainder keeps the user's casing.  Exact-match comparison additionally
/// ignores surrounding whitespace and punctuation ("Markdown mode." counts)
/// and collapses interior whitespace runs ("markdown  mode" counts).
pub fn detect(text: &str) -> Detection {
    let exact = normalize_exact(text);

    for phrase in OFF_TRIGGERS {
        if exact == *phrase || strip_trigger_prefix(text, phrase).is_some() {
            log::debug!("detector: off phrase {phrase:?} matched");
            return Detection::mode_change(VoiceMode::None, "");
        }
    }

    let mut best: Option<(VoiceMode, &'static str, Option<&str>)> = None;
    for spec in MODES {
        for trigger in spec.triggers {
            let candidate = if exact == *trigger {
                Some((spec.mode, *trigger, None))
            } else {
                strip_trigger_prefix(text, trigger).map(|rest| (spec.mode, *trigger, Some(rest)))
            };
            if let Some(c) = candidate {
                if best.is_none_or(|(_, t, _)| c.1.len() > t.len()) {
                    best = Some(c);
                }
            }
        }
    }

    match best {
        Some((mode, trigger, rest)) => {
            log::debug!("detector: trigger {trigger:?} → {}", mode.display_name());
            Detection::mode_change(mode, rest.unwrap_or(""))
        }
        None => Detection::no_change(text),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lowercased copy with surrounding whitespace and punctuation removed and
/// interior whitespace runs collapsed, for exact-utterance comparison.  ASR
/// output sometimes carries doubled spaces inside a trigger phrase.
fn normalize_exact(text: &str) -> String {
    text.trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// If `text` starts with `trigger` followed by a space (ASCII
/// case-insensitive), return the content after that space.
///
/// Triggers are ASCII, so a matching prefix is all-ASCII and the byte offset
/// `trigger.len() + 1` is a valid char boundary.
fn strip_trigger_prefix<'a>(text: &'a str, trigger: &str) -> Option<&'a str> {
    let bytes = text.as_bytes();
    let trig = trigger.as_bytes();
    if bytes.len() <= trig.len() {
        return None;
    }
    if !bytes[..trig.len()].eq_ignore_ascii_case(trig) || bytes[trig.len()] != b' ' {
        return None;
    }
    Some(&text[trig.len() + 1..])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- deactivation ---

    #[test]
    fn off_phrase_exact() {
        let d = detect("markdown off");
        assert_eq!(d.mode, Some(VoiceMode::None));
        assert_eq!(d.remainder, "");
    }

    #[test]
    fn off_phrase_with_case_and_punctuation() {
        let d = detect("  Mode off.  ");
        assert_eq!(d.mode, Some(VoiceMode::None));
        assert_eq!(d.remainder, "");
    }

    #[test]
    fn off_phrase_prefix_discards_trailing_content() {
        let d = detect("mode off thanks");
        assert_eq!(d.mode, Some(VoiceMode::None));
        assert_eq!(d.remainder, "");
    }

    #[test]
    fn off_phrase_beats_bare_markdown_trigger() {
        // "markdown off" starts with the bare "markdown" trigger; the
        // deactivation check runs first and must win.
        let d = detect("markdown off");
        assert_eq!(d.mode, Some(VoiceMode::None));
    }

    // --- activation ---

    #[test]
    fn activation_exact() {
        let d = detect("python mode");
        assert_eq!(d.mode, Some(VoiceMode::Python));
        assert_eq!(d.remainder, "");
    }

    #[test]
    fn activation_exact_ignores_case_and_punctuation() {
        let d = detect("Markdown Mode!");
        assert_eq!(d.mode, Some(VoiceMode::Markdown));
        assert_eq!(d.remainder, "");
    }

    #[test]
    fn exact_match_tolerates_interior_space_runs() {
        // A doubled space inside the phrase fails the prefix test; the exact
        // test must still recognise the full trigger, not fall back to the
        // bare "markdown" trigger with " mode" as remainder.
        let d = detect("markdown  mode");
        assert_eq!(d.mode, Some(VoiceMode::Markdown));
        assert_eq!(d.remainder, "");

        let d = detect("python  mode.");
        assert_eq!(d.mode, Some(VoiceMode::Python));
        assert_eq!(d.remainder, "");
    }

    #[test]
    fn activation_prefix_keeps_remainder_casing() {
        let d = detect("markdown mode Hello World");
        assert_eq!(d.mode, Some(VoiceMode::Markdown));
        assert_eq!(d.remainder, "Hello World");
    }

    #[test]
    fn activation_prefix_is_case_insensitive() {
        let d = detect("JAVASCRIPT MODE let x");
        assert_eq!(d.mode, Some(VoiceMode::JavaScript));
        assert_eq!(d.remainder, "let x");
    }

    #[test]
    fn shell_aliases_activate() {
        assert_eq!(detect("bash mode").mode, Some(VoiceMode::Shell));
        assert_eq!(detect("terminal mode ls").mode, Some(VoiceMode::Shell));
    }

    // --- longest match ---

    #[test]
    fn longest_trigger_wins_over_bare_prefix() {
        // Both "markdown" and "markdown mode" match as prefixes; the longer
        // trigger must win so "mode" is not leaked into the remainder.
        let d = detect("markdown mode notes");
        assert_eq!(d.mode, Some(VoiceMode::Markdown));
        assert_eq!(d.remainder, "notes");
    }

    #[test]
    fn bare_trigger_still_matches_alone() {
        let d = detect("markdown shopping list");
        assert_eq!(d.mode, Some(VoiceMode::Markdown));
        assert_eq!(d.remainder, "shopping list");
    }

    // --- no change ---

    #[test]
    fn plain_content_passes_through() {
        let d = detect("hello there");
        assert_eq!(d.mode, None);
        assert_eq!(d.remainder, "hello there");
    }

    #[test]
    fn trigger_mid_sentence_is_content() {
        let d = detect("I really like markdown mode");
        assert_eq!(d.mode, None);
        assert_eq!(d.remainder, "I really like markdown mode");
    }

    #[test]
    fn trigger_followed_by_comma_is_content() {
        // Prefix matching requires a literal space after the trigger.
        let d = detect("python mode, print stuff");
        assert_eq!(d.mode, None);
    }

    #[test]
    fn bare_trigger_absorbs_near_miss_phrasing() {
        // "markdown mode, notes" fails the "markdown mode" prefix test (comma,
        // not space) but still activates through the bare "markdown" trigger.
        let d = detect("markdown mode, notes");
        assert_eq!(d.mode, Some(VoiceMode::Markdown));
        assert_eq!(d.remainder, "mode, notes");
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(detect("").mode, None);
        let d = detect("   ");
        assert_eq!(d.mode, None);
        assert_eq!(d.remainder, "   ");
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        let d = detect("日本語のテキスト");
        assert_eq!(d.mode, None);
        assert_eq!(d.remainder, "日本語のテキスト");
    }
}
