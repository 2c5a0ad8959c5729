//! Save-name derivation
//!
//! Suggests a filename for the cleaned text: the first non-blank line,
//! trimmed, with characters that are illegal in filenames removed and the
//! result truncated to a fixed number of characters.

/// Fallback name when the text has no usable first line.
pub const DEFAULT_NAME: &str = "processed_text";

/// Maximum length of a derived name, in characters.
pub const MAX_NAME_CHARS: usize = 30;

/// Characters stripped from the derived name.
const ILLEGAL_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Derive a save name from `text`.
///
/// Scans lines in order and takes the first non-blank one, trimmed, with
/// `\ / : * ? " < > |` removed and truncated to [`MAX_NAME_CHARS`]
/// characters (never splitting a multibyte character). Falls back to
/// [`DEFAULT_NAME`] when no non-blank line exists or sanitization leaves
/// nothing.
pub fn derive_name(text: &str) -> String {
    let first_line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(DEFAULT_NAME);

    let sanitized: String = first_line
        .chars()
        .filter(|ch| !ILLEGAL_CHARS.contains(ch))
        .take(MAX_NAME_CHARS)
        .collect();

    if sanitized.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        sanitized
    }
}
