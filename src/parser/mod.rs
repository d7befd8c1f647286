//! HANDOFF.md Parsing
//!
//! Best-effort, line-based extraction of handoff state from markdown.
//! Parsing is total: malformed or missing sections degrade to empty
//! defaults rather than raising errors.

mod handoff;

pub use handoff::parse_handoff;
