//! Parenthetical span scanning
//!
//! A single left-to-right pass over the document records every parenthesized
//! substring. ASCII `(...)` and fullwidth `（...）` pairs are independent
//! alternation branches, matched non-greedily and across newlines, so matches
//! never nest or overlap: once a match is consumed, scanning resumes after its
//! end offset and a parenthesis inside an already-matched span is never a new
//! span start.
//!
//! A mismatched pair (ASCII open closed by a fullwidth close, or the reverse)
//! matches neither branch and is left untouched. That is intentional and kept
//! as documented behavior.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest ASCII or fullwidth parenthetical, newlines included.
static PAREN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\(.*?\)|（.*?）").unwrap());

/// Number of characters of surrounding context shown on each side of a span.
pub const CONTEXT_CHARS: usize = 15;

/// One parenthetical match, recorded against the exact document snapshot it
/// was extracted from.
///
/// `start` and `end` are byte offsets into that snapshot; any mutation of the
/// document after extraction invalidates them, which is why [`crate::Session`]
/// freezes the document once a span list exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start offset (bytes) at extraction time
    pub start: usize,
    /// Exclusive end offset (bytes) at extraction time
    pub end: usize,
    /// The literal substring, bracket delimiters included
    pub content: String,
    /// User decision: keep this span in the final text (default: delete)
    pub keep: bool,
}

impl Span {
    /// Byte length of the matched substring
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// A matched span always contains at least its two delimiters
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Bounded display context around a span, clipped at document boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Up to [`CONTEXT_CHARS`] characters immediately before the span
    pub before: String,
    /// Up to [`CONTEXT_CHARS`] characters immediately after the span
    pub after: String,
}

/// Scan `text` for parenthetical substrings.
///
/// Returns spans in ascending, non-overlapping offset order with `keep`
/// defaulting to `false`. An empty result is a valid outcome ("no matches"),
/// not an error.
pub fn extract(text: &str) -> Vec<Span> {
    PAREN_PATTERN
        .find_iter(text)
        .map(|m| Span {
            start: m.start(),
            end: m.end(),
            content: m.as_str().to_string(),
            keep: false,
        })
        .collect()
}

/// Compute the display context for `span` within `text`.
///
/// Takes up to [`CONTEXT_CHARS`] characters on each side, clipped at the
/// document bounds, with embedded newlines flattened to spaces so the context
/// renders on a single line.
pub fn context_window(text: &str, span: &Span) -> Context {
    let mut before: Vec<char> = text[..span.start]
        .chars()
        .rev()
        .take(CONTEXT_CHARS)
        .collect();
    before.reverse();

    let flatten = |ch: char| if ch == '\n' { ' ' } else { ch };

    Context {
        before: before.into_iter().map(flatten).collect(),
        after: text[span.end..]
            .chars()
            .take(CONTEXT_CHARS)
            .map(flatten)
            .collect(),
    }
}
