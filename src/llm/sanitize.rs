//! Response sanitization for the LLM boundary.
//!
//! Model output is untrusted: chat models prepend boilerplate ("Output:"),
//! wrap answers in quotes or code fences, or run away into multiples of the
//! input length.  [`sanitize_response`] strips the known wrappers and rejects
//! degenerate output so the pipeline can fall back to the preprocessed text.

use crate::llm::corrector::LlmError;

/// Label prefixes chat models prepend to the answer.  Checked longest first
/// and stripped repeatedly ("Output: Corrected: …" loses both).
const BOILERPLATE_PREFIXES: &[&str] = &[
    "corrected text:",
    "corrected:",
    "output:",
    "result:",
    "answer:",
];

/// Quote characters stripped as a single wrapping layer when both ends match.
const WRAPPING_QUOTES: &[char] = &['"', '\'', '`'];

/// Longest accepted response, as a multiple of the input length in chars.
/// Anything past this is a runaway generation.
const MAX_LENGTH_RATIO: usize = 3;

// ---------------------------------------------------------------------------
// sanitize_response
// ---------------------------------------------------------------------------

/// Clean a raw model response, or reject it as degenerate.
///
/// Steps, in order: strip boilerplate prefixes (repeatedly), strip a wrapping
/// fenced code block, strip a single layer of matching wrapping
/// quotes/backticks, trim.  Returns [`LlmError::InvalidResponse`] when the
/// result is empty or longer than 3× the input.
///
/// ```rust
/// use voicemark::llm::sanitize_response;
///
/// let clean = sanitize_response("Output: \"## hello\"", "heading two hello").unwrap();
/// assert_eq!(clean, "## hello");
/// ```
pub fn sanitize_response(raw: &str, input: &str) -> Result<String, LlmError> {
    let mut out = raw.trim();

    loop {
        let before = out;
        for prefix in BOILERPLATE_PREFIXES {
            // Byte-wise ASCII comparison; a matching prefix is all-ASCII, so
            // the offset is a valid char boundary.
            if out.len() >= prefix.len()
                && out.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
            {
                out = out[prefix.len()..].trim_start();
            }
        }
        if out == before {
            break;
        }
    }

    out = strip_fence(out);
    out = strip_wrapping_quotes(out);
    let out = out.trim();

    if out.is_empty() {
        return Err(LlmError::InvalidResponse);
    }
    if out.chars().count() > MAX_LENGTH_RATIO * input.chars().count() {
        log::warn!(
            "sanitize: rejecting runaway response ({} chars for {} input chars)",
            out.chars().count(),
            input.chars().count()
        );
        return Err(LlmError::InvalidResponse);
    }

    Ok(out.to_string())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Strip one wrapping ``` fence, tolerating a language tag on the opener.
fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") || !trimmed.ends_with("```") || trimmed.len() < 6 {
        return trimmed;
    }
    let inner = &trimmed[3..trimmed.len() - 3];
    // Drop the language tag line if the opener carried one.
    match inner.split_once('\n') {
        Some((first, rest)) if first.chars().all(|c| c.is_alphanumeric()) => rest.trim(),
        _ => inner.trim(),
    }
}

/// Strip a single layer of matching wrapping quote/backtick characters.
fn strip_wrapping_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last))
            if first == last && WRAPPING_QUOTES.contains(&first) && text.len() >= 2 =>
        {
            &text[first.len_utf8()..text.len() - last.len_utf8()]
        }
        _ => text,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
