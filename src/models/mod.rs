//! Handoff Data Model
//!
//! The persisted record behind HANDOFF.md: what is blocking, what got done,
//! what to do next, and what has a deadline attached.

mod handoff;

pub use handoff::HandoffState;
