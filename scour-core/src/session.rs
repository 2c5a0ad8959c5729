//! Session state machine
//!
//! One session covers a full edit-analyze-decide-export cycle. The session
//! owns the document and the span list and enforces the one invariant the
//! whole tool rests on: span offsets are only valid against the exact
//! document snapshot they were extracted from. The phase machine makes that
//! explicit:
//!
//! ```text
//! Editing --extract--> Reviewing --(reset)--> Editing
//! ```
//!
//! In `Editing` the document is freely mutable and no spans exist. In
//! `Reviewing` the document is frozen and only per-span keep flags may
//! change. Every mutation in the wrong phase is refused with a
//! [`SessionError`] and leaves the session untouched.

use crate::error::SessionError;
use crate::reconstruct;
use crate::scrub;
use crate::span::{self, Span};

/// Which phase the session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Document freely editable; no spans recorded
    #[default]
    Editing,
    /// Document frozen behind an extraction pass; only keep flags may change
    Reviewing,
}

/// One edit-analyze-decide-export cycle: the document, the recorded spans,
/// and the phase guarding them.
#[derive(Debug, Default)]
pub struct Session {
    text: String,
    spans: Vec<Span>,
    phase: Phase,
}

impl Session {
    /// Start an empty session in the editing phase.
    pub fn new() -> Self {
        Session::default()
    }

    /// Start a session pre-loaded with `text`, still editable.
    pub fn with_text(text: impl Into<String>) -> Self {
        Session {
            text: text.into(),
            spans: Vec::new(),
            phase: Phase::Editing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// True once extraction has frozen the document.
    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Reviewing
    }

    /// Number of spans currently marked keep.
    pub fn kept_count(&self) -> usize {
        self.spans.iter().filter(|s| s.keep).count()
    }

    /// Number of spans currently marked delete.
    pub fn deleted_count(&self) -> usize {
        self.spans.len() - self.kept_count()
    }

    /// Mutate the document through `edit`. Refused while locked for review.
    pub fn edit(&mut self, edit: impl FnOnce(&mut String)) -> Result<(), SessionError> {
        self.ensure_editable()?;
        edit(&mut self.text);
        Ok(())
    }

    /// Replace the whole document. Refused while locked for review.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.text = text.into();
        Ok(())
    }

    /// Delete every `*` from the document, returning how many were removed.
    ///
    /// `Ok(0)` is the informational "nothing to do" outcome. Refused while
    /// locked for review, because deleting characters would shift every
    /// recorded span offset.
    pub fn remove_stars(&mut self) -> Result<usize, SessionError> {
        self.ensure_editable()?;
        let (scrubbed, removed) = scrub::remove_stars(&self.text);
        if removed > 0 {
            self.text = scrubbed;
        }
        Ok(removed)
    }

    /// Run the extraction pass and freeze the document for review.
    ///
    /// Refused on blank/whitespace-only text and while a previous pass is
    /// outstanding. Zero matches is a valid outcome: the session still
    /// enters `Reviewing` (with nothing to decide) and the caller surfaces
    /// "no matches" rather than an error.
    pub fn extract(&mut self) -> Result<&[Span], SessionError> {
        if self.phase == Phase::Reviewing {
            return Err(SessionError::AlreadyExtracted);
        }
        if self.text.trim().is_empty() {
            return Err(SessionError::EmptyDocument);
        }
        self.spans = span::extract(&self.text);
        self.phase = Phase::Reviewing;
        Ok(&self.spans)
    }

    /// Set the keep/delete decision for span `index`.
    pub fn set_keep(&mut self, index: usize, keep: bool) -> Result<(), SessionError> {
        if self.phase != Phase::Reviewing {
            return Err(SessionError::NotReviewing);
        }
        let len = self.spans.len();
        let span = self
            .spans
            .get_mut(index)
            .ok_or(SessionError::SpanOutOfRange { index, len })?;
        span.keep = keep;
        Ok(())
    }

    /// Flip the decision for span `index`, returning the new value.
    pub fn toggle_keep(&mut self, index: usize) -> Result<bool, SessionError> {
        if self.phase != Phase::Reviewing {
            return Err(SessionError::NotReviewing);
        }
        let len = self.spans.len();
        let span = self
            .spans
            .get_mut(index)
            .ok_or(SessionError::SpanOutOfRange { index, len })?;
        span.keep = !span.keep;
        Ok(span.keep)
    }

    /// Produce the final text with the current decisions applied.
    ///
    /// While still editing (no spans) this returns the buffer unchanged,
    /// matching the save path when no analysis ran.
    pub fn reconstruct(&self) -> String {
        reconstruct::reconstruct(&self.text, &self.spans)
    }

    /// Discard everything and return to an empty editing session.
    pub fn reset(&mut self) {
        self.text.clear();
        self.spans.clear();
        self.phase = Phase::Editing;
    }

    fn ensure_editable(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Editing => Ok(()),
            Phase::Reviewing => Err(SessionError::DocumentLocked),
        }
    }
}
