//! # scour-core
//!
//! Core engine for the scour text-cleanup tool: parenthetical span scanning,
//! selective reconstruction, character statistics, filename derivation, and
//! the session state machine tying them together.
//!
//! Everything in this crate is pure data and pure functions; the terminal
//! front end lives in `scour-viewer` and only translates results into
//! rendering and status messages.

pub mod error;
pub mod filename;
pub mod reconstruct;
pub mod scrub;
pub mod session;
pub mod span;
pub mod stats;

pub use error::SessionError;
pub use filename::derive_name;
pub use reconstruct::reconstruct;
pub use scrub::remove_stars;
pub use session::{Phase, Session};
pub use span::{context_window, extract, Context, Span};
pub use stats::{stats, CharCounts};
