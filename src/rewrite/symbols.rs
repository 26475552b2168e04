//! Spoken-symbol conversion for programming modes.
//!
//! [`convert_spoken_symbols`] is the always-available fallback used when the
//! LLM is disabled or unavailable: an ordered table of case-insensitive
//! word-boundary rules turning spoken operator/delimiter phrases into literal
//! symbols.  Longer phrases come before their prefixes ("dash dash" before
//! "dash", "equals equals" before "equals") so partial matches never fire
//! first.
//!
//! Markdown block/inline vocabulary is deliberately absent — that is handled
//! by [`super::preprocess`].
//!
//! [`has_spoken_symbols`] reports whether any rule in the table would match;
//! the orchestrator uses it as the cheap "text looks correctable" signal.

use lazy_static::lazy_static;
use regex::Regex;

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

// Spacing is encoded in the patterns: `[ ]*` before a phrase attaches the
// symbol to the previous word, `[ ]*` after attaches it to the next.
lazy_static! {
    static ref SYMBOL_RULES: Vec<(Regex, &'static str)> = vec![
        // comparisons
        (Regex::new(r"(?i)\bless than or equal to\b").unwrap(), "<="),
        (Regex::new(r"(?i)\bgreater than or equal to\b").unwrap(), ">="),
        (Regex::new(r"(?i)\b(?:not equal to|not equals|bang equals)\b").unwrap(), "!="),
        (Regex::new(r"(?i)\btriple equals\b").unwrap(), "==="),
        (Regex::new(r"(?i)\b(?:equals equals|double equals)\b").unwrap(), "=="),
        (Regex::new(r"(?i)\bless than\b").unwrap(), "<"),
        (Regex::new(r"(?i)\bgreater than\b").unwrap(), ">"),
        (Regex::new(r"(?i)\b(?:equal sign|equals)\b").unwrap(), "="),
        // arrows
        (Regex::new(r"(?i)\b(?:fat arrow|double arrow)\b").unwrap(), "=>"),
        (Regex::new(r"(?i)\barrow\b").unwrap(), "->"),
        // arithmetic / logic
        (Regex::new(r"(?i)[ ]*\bplus plus\b[ ]*").unwrap(), "++"),
        (Regex::new(r"(?i)\bplus\b").unwrap(), "+"),
        (Regex::new(r"(?i)\bminus\b").unwrap(), "-"),
        (Regex::new(r"(?i)\b(?:asterisk|star|times)\b").unwrap(), "*"),
        (Regex::new(r"(?i)\b(?:divided by|forward slash|slash)\b").unwrap(), "/"),
        (Regex::new(r"(?i)\b(?:percent|modulo)\b").unwrap(), "%"),
        (Regex::new(r"(?i)\bcaret\b").unwrap(), "^"),
        (Regex::new(r"(?i)\b(?:double ampersand|and and)\b").unwrap(), "&&"),
        (Regex::new(r"(?i)\bdouble pipe\b").unwrap(), "||"),
        (Regex::new(r"(?i)\bampersand\b").unwrap(), "&"),
        (Regex::new(r"(?i)\bpipe\b").unwrap(), "|"),
        // flags / joiners
        (Regex::new(r"(?i)\bdash dash\b[ ]*").unwrap(), "--"),
        (Regex::new(r"(?i)[ ]*\b(?:dash|hyphen)\b[ ]*").unwrap(), "-"),
        (Regex::new(r"(?i)[ ]*\bunderscore\b[ ]*").unwrap(), "_"),
        (Regex::new(r"(?i)[ ]*\bdot\b[ ]*").unwrap(), "."),
        // grouping
        (Regex::new(r"(?i)[ ]*\b(?:open|left) paren(?:thesis)?\b[ ]*").unwrap(), "("),
        (Regex::new(r"(?i)[ ]*\b(?:close|right) paren(?:thesis)?\b").unwrap(), ")"),
        (Regex::new(r"(?i)[ ]*\b(?:open|left) bracket\b[ ]*").unwrap(), "["),
        (Regex::new(r"(?i)[ ]*\b(?:close|right) bracket\b").unwrap(), "]"),
        (Regex::new(r"(?i)[ ]*\b(?:open|left)(?: curly)? brace\b[ ]*").unwrap(), "{"),
        (Regex::new(r"(?i)[ ]*\b(?:close|right)(?: curly)? brace\b").unwrap(), "}"),
        // punctuation
        (Regex::new(r"(?i)[ ]*\bsemicolon\b").unwrap(), ";"),
        (Regex::new(r"(?i)[ ]*\bcolon\b").unwrap(), ":"),
        (Regex::new(r"(?i)[ ]*\bcomma\b").unwrap(), ","),
        (Regex::new(r"(?i)[ ]*\b(?:full stop|period)\b").unwrap(), "."),
        (Regex::new(r"(?i)[ ]*\bquestion mark\b").unwrap(), "?"),
        (Regex::new(r"(?i)[ ]*\b(?:exclamation mark|exclamation point|bang)\b").unwrap(), "!"),
        (Regex::new(r"(?i)\bdouble quote\b").unwrap(), "\""),
        (Regex::new(r"(?i)\b(?:single quote|apostrophe)\b").unwrap(), "'"),
        (Regex::new(r"(?i)\bbacktick\b").unwrap(), "`"),
        (Regex::new(r"(?i)\bat (?:sign|symbol)\b").unwrap(), "@"),
        (Regex::new(r"(?i)\bdollar sign\b").unwrap(), "$$"),
        (Regex::new(r"(?i)\b(?:hashtag|hash|pound sign)\b").unwrap(), "#"),
        (Regex::new(r"(?i)\btilde\b").unwrap(), "~"),
    ];

    static ref SPACE_RUN: Regex = Regex::new(r" {2,}").unwrap();
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Apply the spoken-symbol table in order.
///
/// ```rust
/// use voicemark::rewrite::convert_spoken_symbols;
///
/// assert_eq!(convert_spoken_symbols("dash dash verbose"), "--verbose");
/// assert_eq!(convert_spoken_symbols("a less than b"), "a < b");
/// ```
pub fn convert_spoken_symbols(text: &str) -> String {
    let mut out = text.to_string();
    for (re, rep) in SYMBOL_RULES.iter() {
        out = re.replace_all(&out, *rep).into_owned();
    }
    SPACE_RUN.replace_all(&out, " ").trim().to_string()
}

/// True iff any spoken-symbol rule would fire on `text`.
///
/// Cheap heuristic the orchestrator uses to decide whether LLM correction is
/// worth invoking when `llm_always_apply` is off.
pub fn has_spoken_symbols(text: &str) -> bool {
    SYMBOL_RULES.iter().any(|(re, _)| re.is_match(text))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- comparisons ---

    #[test]
    fn comparison_phrases() {
        assert_eq!(convert_spoken_symbols("a less than b"), "a < b");
        assert_eq!(convert_spoken_symbols("a greater than or equal to b"), "a >= b");
        assert_eq!(convert_spoken_symbols("x not equals y"), "x != y");
        assert_eq!(convert_spoken_symbols("x equals y"), "x = y");
    }

    #[test]
    fn longer_equals_phrases_win() {
        assert_eq!(convert_spoken_symbols("a equals equals b"), "a == b");
        assert_eq!(convert_spoken_symbols("a triple equals b"), "a === b");
    }

    // --- arrows ---

    #[test]
    fn arrows() {
        assert_eq!(convert_spoken_symbols("x arrow y"), "x -> y");
        assert_eq!(convert_spoken_symbols("x fat arrow y"), "x => y");
    }

    // --- flags / joiners ---

    #[test]
    fn double_dash_attaches_to_the_flag_name() {
        assert_eq!(convert_spoken_symbols("dash dash verbose"), "--verbose");
        assert_eq!(convert_spoken_symbols("run dash dash help now"), "run --help now");
    }

    #[test]
    fn single_dash_and_underscore_join_words() {
        assert_eq!(convert_spoken_symbols("my dash file"), "my-file");
        assert_eq!(convert_spoken_symbols("snake underscore case"), "snake_case");
    }

    #[test]
    fn dot_joins_both_sides() {
        assert_eq!(convert_spoken_symbols("object dot method"), "object.method");
    }

    // --- grouping ---

    #[test]
    fn parens_brackets_braces() {
        assert_eq!(convert_spoken_symbols("f open paren x close paren"), "f(x)");
        assert_eq!(convert_spoken_symbols("open bracket 1 close bracket"), "[1]");
        assert_eq!(convert_spoken_symbols("open curly brace close curly brace"), "{}");
        assert_eq!(convert_spoken_symbols("left parenthesis y right parenthesis"), "(y)");
    }

    // --- punctuation ---

    #[test]
    fn punctuation_attaches_left() {
        assert_eq!(convert_spoken_symbols("done semicolon"), "done;");
        assert_eq!(convert_spoken_symbols("the end period"), "the end.");
        assert_eq!(convert_spoken_symbols("really question mark"), "really?");
    }

    #[test]
    fn arithmetic_stays_spaced() {
        assert_eq!(convert_spoken_symbols("a plus b"), "a + b");
        assert_eq!(convert_spoken_symbols("a times b percent c"), "a * b % c");
        assert_eq!(convert_spoken_symbols("i plus plus"), "i++");
    }

    #[test]
    fn logic_operators() {
        assert_eq!(convert_spoken_symbols("a double ampersand b"), "a && b");
        assert_eq!(convert_spoken_symbols("a double pipe b"), "a || b");
    }

    #[test]
    fn case_insensitive_matching() {
        assert_eq!(convert_spoken_symbols("A Less Than B"), "A < B");
        assert_eq!(convert_spoken_symbols("Dash Dash force"), "--force");
    }

    #[test]
    fn plain_prose_is_untouched() {
        assert_eq!(
            convert_spoken_symbols("the quick brown fox"),
            "the quick brown fox"
        );
        // Word boundaries keep rule words inside other words safe.
        assert_eq!(convert_spoken_symbols("surplus stardust"), "surplus stardust");
    }

    // --- heuristic ---

    #[test]
    fn heuristic_detects_rule_words() {
        assert!(has_spoken_symbols("x equals y"));
        assert!(has_spoken_symbols("dash dash verbose"));
        assert!(has_spoken_symbols("Open Paren"));
    }

    #[test]
    fn heuristic_rejects_plain_prose() {
        assert!(!has_spoken_symbols("the quick brown fox"));
        assert!(!has_spoken_symbols(""));
    }
}
