//! Star removal
//!
//! Deletes formatting asterisks from the document before analysis. The
//! session layer refuses this once spans are outstanding, because removing
//! characters would shift every recorded offset.

/// Delete every literal `*` from `text`.
///
/// Returns the scrubbed text together with the number of asterisks removed;
/// a count of zero means there was nothing to do and the text is returned
/// unchanged. Idempotent: a second pass always removes zero.
pub fn remove_stars(text: &str) -> (String, usize) {
    let removed = text.matches('*').count();
    if removed == 0 {
        (text.to_string(), 0)
    } else {
        (text.replace('*', ""), removed)
    }
}
