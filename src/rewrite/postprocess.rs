//! Final deterministic cleanup after correction.
//!
//! Overlapping rules (and occasionally the LLM) can leave doubled markers
//! behind — a spoken "hash heading two" produces `"# ##"`, an over-eager
//! model may emit `"****bold****"`.  [`postprocess`] merges split heading
//! markers, caps marker runs at their longest legal Markdown length, and
//! normalizes whitespace.
//!
//! Marker merging/capping only runs in Markdown mode — programming modes
//! legitimately contain runs like `===` or `--` that must survive.  Plain
//! mode gets whitespace treatment only.

use lazy_static::lazy_static;
use regex::Regex;

use crate::mode::VoiceMode;

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

lazy_static! {
    /// Adjacent heading markers split by a space: `"# #"` → `"##"`.
    /// Applied to a fixed point so `"# # #"` fully merges.
    static ref HEADING_MERGE: Regex = Regex::new(r"(#+) (#+)").unwrap();

    /// Marker runs capped at the longest length Markdown gives meaning to.
    static ref CAP_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"#{7,}").unwrap(), "######"),
        (Regex::new(r"\*{4,}").unwrap(), "***"),
        (Regex::new(r"~{3,}").unwrap(), "~~"),
        (Regex::new(r"={3,}").unwrap(), "=="),
        (Regex::new(r"`{4,}").unwrap(), "```"),
        (Regex::new(r"-{4,}").unwrap(), "---"),
        (Regex::new(r"\^{2,}").unwrap(), "^"),
    ];

    static ref SPACE_BEFORE_NEWLINE: Regex = Regex::new(r" +\n").unwrap();
    static ref SPACE_RUN: Regex = Regex::new(r" {2,}").unwrap();
}

// ---------------------------------------------------------------------------
// postprocess
// ---------------------------------------------------------------------------

/// Final cleanup pass over the corrected text.
///
/// ```rust
/// use voicemark::mode::VoiceMode;
/// use voicemark::rewrite::postprocess;
///
/// assert_eq!(postprocess("# # title", VoiceMode::Markdown), "## title");
/// assert_eq!(postprocess("a  ===  b", VoiceMode::JavaScript), "a === b");
/// ```
pub fn postprocess(text: &str, mode: VoiceMode) -> String {
    if mode == VoiceMode::None {
        return SPACE_RUN.replace_all(text, " ").trim().to_string();
    }

    let mut out = text.to_string();

    if mode == VoiceMode::Markdown {
        loop {
            let next = HEADING_MERGE.replace_all(&out, "$1$2").into_owned();
            if next == out {
                break;
            }
            out = next;
        }
        for (re, rep) in CAP_RULES.iter() {
            out = re.replace_all(&out, *rep).into_owned();
        }
    }

    out = SPACE_BEFORE_NEWLINE.replace_all(&out, "\n").into_owned();
    SPACE_RUN.replace_all(&out, " ").trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- markdown ---

    #[test]
    fn split_heading_markers_merge() {
        assert_eq!(postprocess("# # title", VoiceMode::Markdown), "## title");
        assert_eq!(postprocess("# # # deep", VoiceMode::Markdown), "### deep");
    }

    #[test]
    fn heading_runs_cap_at_six() {
        assert_eq!(
            postprocess("######## too deep", VoiceMode::Markdown),
            "###### too deep"
        );
    }

    #[test]
    fn emphasis_runs_cap() {
        assert_eq!(postprocess("****loud****", VoiceMode::Markdown), "***loud***");
        assert_eq!(postprocess("~~~gone~~~", VoiceMode::Markdown), "~~gone~~");
        assert_eq!(postprocess("===key===", VoiceMode::Markdown), "==key==");
        assert_eq!(postprocess("^^up^^", VoiceMode::Markdown), "^up^");
    }

    #[test]
    fn valid_markdown_is_untouched() {
        let text = "## title\n- item\n**bold** and `code`";
        assert_eq!(postprocess(text, VoiceMode::Markdown), text);
    }

    #[test]
    fn trailing_spaces_before_newlines_are_stripped() {
        assert_eq!(
            postprocess("line one   \nline two", VoiceMode::Markdown),
            "line one\nline two"
        );
    }

    // --- programming modes keep their symbol runs ---

    #[test]
    fn programming_modes_keep_long_symbol_runs() {
        assert_eq!(postprocess("a === b", VoiceMode::JavaScript), "a === b");
        assert_eq!(postprocess("ls --all", VoiceMode::Shell), "ls --all");
        assert_eq!(postprocess("x **= 2", VoiceMode::Python), "x **= 2");
    }

    #[test]
    fn programming_modes_still_collapse_whitespace() {
        assert_eq!(postprocess("  x  =  1  ", VoiceMode::Python), "x = 1");
    }

    // --- plain mode ---

    #[test]
    fn plain_mode_only_normalizes_whitespace() {
        assert_eq!(postprocess("  a  b  ", VoiceMode::None), "a b");
        assert_eq!(postprocess("# # stays", VoiceMode::None), "# # stays");
    }
}
