//! Spoken-URL cleanup.
//!
//! ASR output renders dictated URLs as spaced word salad:
//! `"https colon slash slash example . com / path"`.  [`normalize_urls`]
//! rewrites the spoken scheme/TLD vocabulary into literal characters, then
//! runs two fixed-point loops: the first tightens the spaces in and around a
//! forming `://`, the second — only once a `://` exists in the string —
//! tightens spaces around remaining slashes and dots.

use lazy_static::lazy_static;
use regex::Regex;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

lazy_static! {
    /// Spoken URL fragments.  "www dot" consumes the following space,
    /// "dot <tld>" consumes the preceding one.
    static ref URL_VOCAB: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\b(?:colon slash slash|colon double slash)\b").unwrap(), "://"),
        (Regex::new(r"\bwww dot\b[ ]*").unwrap(), "www."),
        (Regex::new(r"[ ]*\bdot (com|org|net|io|dev)\b").unwrap(), ".$1"),
    ];
}

/// Space variants the ASR produces around a `://` separator.
const SCHEME_TIGHTEN: &[(&str, &str)] = &[
    (": / /", "://"),
    (": //", "://"),
    (":/ /", "://"),
    (" ://", "://"),
    (":// ", "://"),
];

/// Once a `://` is established, remaining slashes and dots in the string are
/// URL parts and lose their surrounding spaces.
const SLASH_DOT_TIGHTEN: &[(&str, &str)] = &[
    (" /", "/"),
    ("/ ", "/"),
    (" .", "."),
    (". ", "."),
];

// ---------------------------------------------------------------------------
// normalize_urls
// ---------------------------------------------------------------------------

/// Rewrite spoken URL fragments and converge spacing to a literal URL.
///
/// ```rust
/// use voicemark::rewrite::normalize_urls;
///
/// assert_eq!(
///     normalize_urls("https colon slash slash example . com / path"),
///     "https://example.com/path"
/// );
/// ```
pub fn normalize_urls(text: &str) -> String {
    let mut out = text.to_string();
    for (re, rep) in URL_VOCAB.iter() {
        out = re.replace_all(&out, *rep).into_owned();
    }

    out = fixed_point(&out, SCHEME_TIGHTEN);

    // Slash/dot tightening only applies to strings that actually carry a URL;
    // without this gate every sentence-final ". " in prose would collapse.
    if out.contains("://") {
        out = fixed_point(&out, SLASH_DOT_TIGHTEN);
    }

    out
}

/// Apply `rules` repeatedly until a full pass changes nothing.
fn fixed_point(text: &str, rules: &[(&str, &str)]) -> String {
    let mut out = text.to_string();
    loop {
        let mut changed = false;
        for (from, to) in rules {
            let next = out.replace(from, to);
            if next != out {
                out = next;
                changed = true;
            }
        }
        if !changed {
            return out;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spoken_scheme_and_spaced_path_converge() {
        assert_eq!(
            normalize_urls("https colon slash slash example . com / path"),
            "https://example.com/path"
        );
    }

    #[test]
    fn colon_double_slash_variant() {
        assert_eq!(
            normalize_urls("http colon double slash localhost"),
            "http://localhost"
        );
    }

    #[test]
    fn www_dot_and_tld_vocabulary() {
        assert_eq!(normalize_urls("www dot example dot org"), "www.example.org");
        assert_eq!(normalize_urls("cat dot io"), "cat.io");
        assert_eq!(normalize_urls("tools dot dev"), "tools.dev");
    }

    #[test]
    fn heavily_spaced_scheme_still_converges() {
        assert_eq!(
            normalize_urls("ftp : / / host / file"),
            "ftp://host/file"
        );
    }

    #[test]
    fn prose_without_url_keeps_its_spacing() {
        // No "://" in the string, so slash/dot tightening must not run.
        assert_eq!(normalize_urls("either / or . Done"), "either / or . Done");
    }

    #[test]
    fn prose_around_a_url_loses_slash_dot_spaces() {
        // Documented sharp edge: once a URL exists, the whole string is
        // tightened.
        assert_eq!(
            normalize_urls("see https colon slash slash a . b then . stop"),
            "see https://a.b then.stop"
        );
    }

    #[test]
    fn already_clean_url_is_a_fixed_point() {
        let url = "https://example.com/path?q=1";
        assert_eq!(normalize_urls(url), url);
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_urls(""), "");
    }
}
