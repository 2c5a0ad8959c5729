//! Character statistics for the final text

/// Character counts reported after cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounts {
    /// Length of the text as a sequence of characters
    pub total: usize,
    /// Characters remaining after removing ASCII space, `\n`, and `\r`.
    ///
    /// Tabs and fullwidth spaces are deliberately counted as content; the
    /// tool has always stripped only space/CR/LF and that set is kept as-is.
    pub non_space: usize,
}

/// Count total and non-whitespace characters in `text`.
pub fn stats(text: &str) -> CharCounts {
    let mut total = 0;
    let mut non_space = 0;
    for ch in text.chars() {
        total += 1;
        if !matches!(ch, ' ' | '\n' | '\r') {
            non_space += 1;
        }
    }
    CharCounts { total, non_space }
}
