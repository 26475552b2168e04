//! Deterministic spoken-token rewriting.
//!
//! [`preprocess`] converts spoken punctuation and markup vocabulary into
//! literal symbols before any model-based correction runs.  The rule tables
//! are applied in a fixed order and that order is a contract — later tables
//! assume the earlier ones already ran:
//!
//! 1. Repeated-symbol collapse, longest run first ("hash hash hash" → `###`).
//! 2. Toggle pairs ("bold on … bold off" → `**…**`).
//! 3. Block-level elements at start-of-line (headings, bullets, numbered
//!    items, quotes, checkboxes, code fences).
//! 4. Inline compounds (links, images, footnotes).
//! 5. Line-break and paragraph vocabulary.
//! 6. URL cleanup (see [`super::url`]).
//! 7. Whitespace collapse + trim.
//!
//! In [`VoiceMode::None`] only commas are stripped and whitespace collapsed;
//! none of the tables run.  Rules match spoken words, never the symbols they
//! emit, so running `preprocess` on its own output changes nothing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::mode::VoiceMode;

// ---------------------------------------------------------------------------
// Keyword vocabulary
// ---------------------------------------------------------------------------

/// Every word that appears in a rule phrase below, sorted for binary search.
/// These are lowercased word-wise before the tables run so the lowercase
/// literal patterns match regardless of ASR capitalisation.
static KEYWORDS: &[&str] = &[
    "begin", "block", "bold", "box", "break", "bullet", "check", "checkbox",
    "checked", "close", "code", "colon", "com", "dash", "dev", "dot",
    "double", "eight", "end", "fence", "five", "footnote", "four", "h1",
    "h2", "h3", "h4", "h5", "h6", "hash", "heading", "highlight", "image",
    "inline", "io", "italic", "italics", "item", "line", "link", "net",
    "new", "newline", "nine", "number", "numbered", "off", "on", "one",
    "open", "org",
    "paragraph", "point", "quote", "seven", "six", "slash", "start",
    "strike", "strikethrough", "subscript", "superscript", "ten", "text",
    "three", "through", "to", "two", "unchecked", "url", "www",
];

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

lazy_static! {
    /// Step 1: "hash" runs from six words down to one, then "dash" runs from
    /// three down to one.  Collapsing the longest run first keeps six spoken
    /// hashes from becoming six separate `#` marks.
    static ref REPEAT_RULES: Vec<(Regex, String)> = {
        let mut rules = Vec::new();
        for n in (1..=6).rev() {
            let phrase = vec!["hash"; n].join(" ");
            rules.push((
                Regex::new(&format!(r"\b{phrase}\b")).unwrap(),
                "#".repeat(n),
            ));
        }
        for n in (1..=3).rev() {
            let phrase = vec!["dash"; n].join(" ");
            rules.push((
                Regex::new(&format!(r"\b{phrase}\b")).unwrap(),
                "-".repeat(n),
            ));
        }
        rules
    };

    /// Step 2: toggle pairs.  Openers consume the following space, closers
    /// consume the preceding space and keep a trailing period/comma.
    /// "bold italic" is listed before "bold"/"italic" so the compound wins;
    /// the bare "code" closers omit "end code" (it would shadow the
    /// "end code block" fence phrase in step 3).
    static ref TOGGLE_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\b(?:bold italic on|bold italic start|start bold italic)\b[ ]*").unwrap(), "***"),
        (Regex::new(r"[ ]*\b(?:bold italic off|bold italic end|end bold italic)\b([.,]?)").unwrap(), "***$1"),
        (Regex::new(r"\b(?:bold on|bold start|start bold)\b[ ]*").unwrap(), "**"),
        (Regex::new(r"[ ]*\b(?:bold off|bold end|end bold)\b([.,]?)").unwrap(), "**$1"),
        (Regex::new(r"\b(?:italic on|italics on|italic start|start italic|start italics)\b[ ]*").unwrap(), "*"),
        (Regex::new(r"[ ]*\b(?:italic off|italics off|italic end|end italic|end italics)\b([.,]?)").unwrap(), "*$1"),
        (Regex::new(r"\b(?:strikethrough on|strikethrough start|start strikethrough|strike through on|start strike through)\b[ ]*").unwrap(), "~~"),
        (Regex::new(r"[ ]*\b(?:strikethrough off|strikethrough end|end strikethrough|strike through off|end strike through)\b([.,]?)").unwrap(), "~~$1"),
        (Regex::new(r"\b(?:highlight on|highlight start|start highlight)\b[ ]*").unwrap(), "=="),
        (Regex::new(r"[ ]*\b(?:highlight off|highlight end|end highlight)\b([.,]?)").unwrap(), "==$1"),
        (Regex::new(r"\b(?:inline code on|inline code start|start inline code|start code|code on|code start)\b[ ]*").unwrap(), "`"),
        (Regex::new(r"[ ]*\b(?:inline code off|inline code end|end inline code|code off|code end)\b([.,]?)").unwrap(), "`$1"),
        (Regex::new(r"\b(?:subscript on|subscript start|start subscript)\b[ ]*").unwrap(), "~"),
        (Regex::new(r"[ ]*\b(?:subscript off|subscript end|end subscript)\b([.,]?)").unwrap(), "~$1"),
        (Regex::new(r"\b(?:superscript on|superscript start|start superscript)\b[ ]*").unwrap(), "^"),
        (Regex::new(r"[ ]*\b(?:superscript off|superscript end|end superscript)\b([.,]?)").unwrap(), "^$1"),
    ];

    /// Step 3: block-level elements, anchored at start-of-string or right
    /// after a newline.  Headings go longest keyword first.  The fence closer
    /// is anchored at end-of-line instead — it is spoken at the end of the
    /// dictated block.
    static ref BLOCK_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?m)^(?:heading (?:six|6)|h6)\b\.?[ ]*").unwrap(), "###### "),
        (Regex::new(r"(?m)^(?:heading (?:five|5)|h5)\b\.?[ ]*").unwrap(), "##### "),
        (Regex::new(r"(?m)^(?:heading (?:four|4)|h4)\b\.?[ ]*").unwrap(), "#### "),
        (Regex::new(r"(?m)^(?:heading (?:three|3)|h3)\b\.?[ ]*").unwrap(), "### "),
        (Regex::new(r"(?m)^(?:heading (?:two|2)|h2)\b\.?[ ]*").unwrap(), "## "),
        (Regex::new(r"(?m)^(?:heading (?:one|1)|h1)\b\.?[ ]*").unwrap(), "# "),
        (Regex::new(r"(?m)^(?:bullet point|bullet)\b[ ]*").unwrap(), "- "),
        (Regex::new(r"(?m)^number (?:one|1)\b\.?[ ]*").unwrap(), "1. "),
        (Regex::new(r"(?m)^number (?:two|2)\b\.?[ ]*").unwrap(), "2. "),
        (Regex::new(r"(?m)^number (?:three|3)\b\.?[ ]*").unwrap(), "3. "),
        (Regex::new(r"(?m)^number (?:four|4)\b\.?[ ]*").unwrap(), "4. "),
        (Regex::new(r"(?m)^number (?:five|5)\b\.?[ ]*").unwrap(), "5. "),
        (Regex::new(r"(?m)^number (?:six|6)\b\.?[ ]*").unwrap(), "6. "),
        (Regex::new(r"(?m)^number (?:seven|7)\b\.?[ ]*").unwrap(), "7. "),
        (Regex::new(r"(?m)^number (?:eight|8)\b\.?[ ]*").unwrap(), "8. "),
        (Regex::new(r"(?m)^number (?:nine|9)\b\.?[ ]*").unwrap(), "9. "),
        (Regex::new(r"(?m)^number (?:ten|10)\b\.?[ ]*").unwrap(), "10. "),
        (Regex::new(r"(?m)^number (\d{1,3})\b\.?[ ]*").unwrap(), "$1. "),
        (Regex::new(r"(?m)^numbered item\b\.?[ ]*").unwrap(), "1. "),
        (Regex::new(r"(?m)^(?:block quote|quote)\b[ ]*").unwrap(), "> "),
        (Regex::new(r"(?m)^(?:checked checkbox|checked check box|checked box|checked item)\b[ ]*").unwrap(), "- [x] "),
        (Regex::new(r"(?m)^(?:unchecked checkbox|unchecked item|check box|checkbox)\b[ ]*").unwrap(), "- [ ] "),
        (Regex::new(r"(?m)^(?:begin code block|code block|code fence)\b\.?[ ]*").unwrap(), "```\n"),
        (Regex::new(r"(?m)[ ]*\b(?:end code block|close code block)\b\.?[ ]*$").unwrap(), "\n```"),
    ];

    /// Step 4: links, images, footnotes.  Images go first (same shape as
    /// links with a leading `!`).
    static ref INLINE_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\b(?:open image|image text|begin image)\b[ ]*").unwrap(), "!["),
        (Regex::new(r"\b(?:open link|link text)\b[ ]*").unwrap(), "["),
        (Regex::new(r"[ ]*\b(?:link to|link url)\b[ ]*").unwrap(), "]("),
        (Regex::new(r"[ ]*\b(?:end link|close link|end image|close image)\b([.,]?)").unwrap(), ")$1"),
        (Regex::new(r"\bfootnote (\d{1,3})\b").unwrap(), "[^$1]"),
        (Regex::new(r"\bopen footnote\b[ ]*").unwrap(), "[^"),
        (Regex::new(r"[ ]*\b(?:end footnote|close footnote)\b([.,]?)").unwrap(), "]$1"),
    ];

    /// Step 5: spoken line breaks.  Paragraph first — it is the more
    /// specific phrase.
    static ref LINEBREAK_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"[ ]*\b(?:new paragraph|paragraph break)\b\.?[ ]*").unwrap(), "\n\n"),
        (Regex::new(r"[ ]*\b(?:new line|newline|line break)\b\.?[ ]*").unwrap(), "\n"),
    ];

    /// Step 7: runs of two or more spaces (newlines untouched).
    static ref SPACE_RUN: Regex = Regex::new(r" {2,}").unwrap();
}

// ---------------------------------------------------------------------------
// preprocess
// ---------------------------------------------------------------------------

/// Rewrite spoken tokens in `text` according to `mode`.
///
/// Commas are stripped in every mode (ASR comma artifacts).  Plain mode stops
/// there apart from whitespace collapse; all other modes run the full rule
/// order documented on this module.
///
/// ```rust
/// use voicemark::mode::VoiceMode;
/// use voicemark::rewrite::preprocess;
///
/// assert_eq!(
///     preprocess("hash hash hash hello", VoiceMode::Markdown),
///     "### hello"
/// );
/// assert_eq!(
///     preprocess("hash hash hash hello", VoiceMode::None),
///     "hash hash hash hello"
/// );
/// ```
pub fn preprocess(text: &str, mode: VoiceMode) -> String {
    let stripped = text.replace(',', "");

    if mode == VoiceMode::None {
        return collapse_spaces(&stripped);
    }

    let mut out = lowercase_keywords(&stripped);

    for (re, rep) in REPEAT_RULES.iter() {
        out = re.replace_all(&out, rep.as_str()).into_owned();
    }
    out = apply_rules(&out, &TOGGLE_RULES);
    out = apply_rules(&out, &BLOCK_RULES);
    out = apply_rules(&out, &INLINE_RULES);
    out = apply_rules(&out, &LINEBREAK_RULES);
    out = super::url::normalize_urls(&out);

    collapse_spaces(&out)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn apply_rules(text: &str, rules: &[(Regex, &'static str)]) -> String {
    let mut out = text.to_string();
    for (re, rep) in rules {
        out = re.replace_all(&out, *rep).into_owned();
    }
    out
}

/// Lowercase every word that belongs to the rule vocabulary, leaving all
/// other words untouched.
fn lowercase_keywords(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() {
            word.push(c);
        } else {
            flush_word(&mut out, &mut word);
            out.push(c);
        }
    }
    flush_word(&mut out, &mut word);
    out
}

fn flush_word(out: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }
    let lower = word.to_lowercase();
    if KEYWORDS.binary_search(&lower.as_str()).is_ok() {
        out.push_str(&lower);
    } else {
        out.push_str(word);
    }
    word.clear();
}

fn collapse_spaces(text: &str) -> String {
    SPACE_RUN.replace_all(text, " ").trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn md(text: &str) -> String {
        preprocess(text, VoiceMode::Markdown)
    }

    // --- plain mode ---

    #[test]
    fn plain_mode_strips_commas_and_collapses_spaces() {
        assert_eq!(preprocess("a,  b,   c", VoiceMode::None), "a b c");
    }

    #[test]
    fn plain_mode_never_rewrites_vocabulary() {
        assert_eq!(
            preprocess("hash hash hash hello", VoiceMode::None),
            "hash hash hash hello"
        );
        assert_eq!(
            preprocess("bold on important bold off", VoiceMode::None),
            "bold on important bold off"
        );
        assert_eq!(
            preprocess("heading one title", VoiceMode::None),
            "heading one title"
        );
    }

    // --- repeated-symbol collapse ---

    #[test]
    fn three_hashes_collapse_to_h3() {
        assert_eq!(md("hash hash hash hello"), "### hello");
    }

    #[test]
    fn single_hash_and_six_hashes() {
        assert_eq!(md("hash hello"), "# hello");
        assert_eq!(md("hash hash hash hash hash hash deep"), "###### deep");
    }

    #[test]
    fn hash_inside_another_word_is_untouched() {
        assert_eq!(md("hashtag trending"), "hashtag trending");
    }

    #[test]
    fn dash_runs_collapse() {
        assert_eq!(md("dash dash dash below"), "--- below");
        assert_eq!(md("a dash b"), "a - b");
    }

    // --- toggles ---

    #[test]
    fn bold_toggle() {
        assert_eq!(md("bold on important bold off"), "**important**");
    }

    #[test]
    fn bold_start_end_phrasing() {
        assert_eq!(md("start bold hi end bold"), "**hi**");
        assert_eq!(md("bold start hi bold end"), "**hi**");
    }

    #[test]
    fn closer_keeps_sentence_punctuation() {
        assert_eq!(md("bold on hi bold off."), "**hi**.");
        assert_eq!(md("say bold on hi bold off now"), "say **hi** now");
    }

    #[test]
    fn bold_italic_wins_over_bold() {
        assert_eq!(
            md("start bold italic wow end bold italic"),
            "***wow***"
        );
    }

    #[test]
    fn italic_strikethrough_highlight() {
        assert_eq!(md("italic on gentle italic off"), "*gentle*");
        assert_eq!(md("strikethrough on old strikethrough off"), "~~old~~");
        assert_eq!(md("strike through on old end strike through"), "~~old~~");
        assert_eq!(md("highlight on key highlight off"), "==key==");
    }

    #[test]
    fn inline_code_toggle() {
        assert_eq!(md("code on println code off"), "`println`");
        assert_eq!(md("inline code on x inline code off"), "`x`");
    }

    #[test]
    fn start_code_opener_pairs_with_code_end() {
        assert_eq!(md("start code ls code end"), "`ls`");
        assert_eq!(md("use start code grep code end here"), "use `grep` here");
    }

    #[test]
    fn subscript_and_superscript() {
        assert_eq!(md("h subscript on 2 subscript off o"), "h ~2~ o");
        assert_eq!(md("x superscript on 2 superscript off"), "x ^2^");
    }

    #[test]
    fn vocabulary_matches_case_insensitively_content_case_kept() {
        assert_eq!(md("Bold On Important bold off"), "**Important**");
    }

    #[test]
    fn commas_are_stripped_before_rules() {
        assert_eq!(md("bold on hi, there bold off"), "**hi there**");
    }

    // --- block-level ---

    #[test]
    fn heading_words_and_aliases() {
        assert_eq!(md("heading one title"), "# title");
        assert_eq!(md("heading two title"), "## title");
        assert_eq!(md("h3 subtitle"), "### subtitle");
        assert_eq!(md("heading 6 deep"), "###### deep");
    }

    #[test]
    fn heading_only_matches_at_line_start() {
        assert_eq!(md("the heading two title"), "the heading two title");
    }

    #[test]
    fn heading_matches_after_literal_newline() {
        assert_eq!(md("intro\nheading one title"), "intro\n# title");
    }

    #[test]
    fn bullets_and_numbered_items() {
        assert_eq!(md("bullet point milk"), "- milk");
        assert_eq!(md("bullet eggs"), "- eggs");
        assert_eq!(md("number one milk"), "1. milk");
        assert_eq!(md("number 2 eggs"), "2. eggs");
        assert_eq!(md("number ten last"), "10. last");
    }

    #[test]
    fn numbered_items_past_ten_use_the_spoken_digits() {
        assert_eq!(md("number 12 twelfth"), "12. twelfth");
        assert_eq!(md("number 101 room"), "101. room");
    }

    #[test]
    fn numbered_item_without_a_number_starts_at_one() {
        assert_eq!(md("numbered item milk"), "1. milk");
        assert_eq!(md("the numbered item milk"), "the numbered item milk");
    }

    #[test]
    fn quotes_and_checkboxes() {
        assert_eq!(md("quote to be or not"), "> to be or not");
        assert_eq!(md("block quote wise words"), "> wise words");
        assert_eq!(md("checkbox buy milk"), "- [ ] buy milk");
        assert_eq!(md("checked item buy milk"), "- [x] buy milk");
    }

    #[test]
    fn fenced_code_block() {
        assert_eq!(
            md("code block print hello end code block"),
            "```\nprint hello\n```"
        );
    }

    // --- inline compounds ---

    #[test]
    fn link_vocabulary() {
        assert_eq!(
            md("open link cool site link to https colon slash slash example dot com end link"),
            "[cool site](https://example.com)"
        );
    }

    #[test]
    fn image_vocabulary() {
        assert_eq!(
            md("open image a cat link to cat dot io end image"),
            "![a cat](cat.io)"
        );
    }

    #[test]
    fn footnote_reference() {
        assert_eq!(md("as shown footnote 1"), "as shown [^1]");
        assert_eq!(md("open footnote see appendix end footnote"), "[^see appendix]");
    }

    // --- line breaks ---

    #[test]
    fn newline_and_paragraph_words() {
        assert_eq!(md("first line new line second line"), "first line\nsecond line");
        assert_eq!(md("intro new paragraph body"), "intro\n\nbody");
    }

    // --- URLs ---

    #[test]
    fn spaced_url_converges() {
        assert_eq!(
            md("https colon slash slash example . com / path"),
            "https://example.com/path"
        );
    }

    // --- idempotency ---

    #[test]
    fn preprocess_is_idempotent_on_rewritten_output() {
        let cases = [
            "hash hash hash hello",
            "bold on important bold off",
            "open link cool site link to https colon slash slash example dot com end link",
            "heading two title",
            "code block print hello end code block",
            "number 12 twelfth",
            "start code ls code end",
        ];
        for case in cases {
            let once = md(case);
            let twice = preprocess(&once, VoiceMode::Markdown);
            assert_eq!(twice, once, "not idempotent for {case:?}");
        }
    }

    // --- vocabulary aggressiveness (documented behavior) ---

    #[test]
    fn vocabulary_words_rewrite_even_as_content() {
        // "dash" is vocabulary wherever it appears in rewriting modes.
        assert_eq!(md("add a dash of salt"), "add a - of salt");
    }
}
