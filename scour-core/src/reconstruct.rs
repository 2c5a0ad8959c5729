//! Selective reconstruction
//!
//! Rebuilds the final text from the original snapshot and the recorded span
//! list: every gap between spans is emitted verbatim, each span's content is
//! emitted only when its `keep` flag is set.

use crate::span::Span;

/// Rebuild `text` applying the keep/delete decisions in `spans`.
///
/// Walks the spans in ascending `start` order with a cursor: the gap before
/// each span is appended unconditionally, the span content only when `keep`,
/// and the cursor advances to the span end. The trailing remainder after the
/// last span is appended verbatim. An empty span list returns the text
/// unchanged.
///
/// Pure and deterministic: the output length equals the input length minus
/// the summed lengths of all dropped spans, and non-span text is preserved
/// exactly. The spans must have been extracted from this exact `text`.
pub fn reconstruct(text: &str, spans: &[Span]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in spans {
        out.push_str(&text[cursor..span.start]);
        if span.keep {
            out.push_str(&span.content);
        }
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
