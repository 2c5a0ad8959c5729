//! Error types for session operations

use std::fmt;

/// Errors returned when a session operation is attempted in the wrong phase
/// or on unusable input.
///
/// A refused operation never changes session state; callers surface the
/// message and carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The document is frozen behind an extraction pass; editing it (or
    /// removing stars from it) would desync every recorded span offset.
    DocumentLocked,
    /// Extraction was requested while spans from a previous pass are still
    /// outstanding.
    AlreadyExtracted,
    /// Extraction was requested on blank or whitespace-only text.
    EmptyDocument,
    /// A keep/delete decision was made while no extraction pass is active.
    NotReviewing,
    /// A keep/delete decision referenced a span that does not exist.
    SpanOutOfRange { index: usize, len: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::DocumentLocked => {
                write!(
                    f,
                    "The document is locked for review; reset before editing it again"
                )
            }
            SessionError::AlreadyExtracted => {
                write!(
                    f,
                    "Parentheticals were already analyzed; reset before analyzing again"
                )
            }
            SessionError::EmptyDocument => {
                write!(f, "The document is empty; paste or type some text first")
            }
            SessionError::NotReviewing => {
                write!(f, "No analysis is active; analyze the document first")
            }
            SessionError::SpanOutOfRange { index, len } => {
                write!(f, "Span index {} is out of range (0..{})", index, len)
            }
        }
    }
}

impl std::error::Error for SessionError {}
