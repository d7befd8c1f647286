//! Handoff Store Module
//!
//! Handles persistence and mutation of session handoff state, including:
//! - Load-or-initialize from an existing HANDOFF.md
//! - Mutators for the session life cycle (block, complete, next action)
//! - Atomic full-file saves
//! - Archive-and-reset between sessions

mod store;

pub use store::HandoffStore;
