// Handoff - Session State Tracker
// A Rust-powered tool for carrying work state across sessions via HANDOFF.md

pub mod cli;
pub mod models;
pub mod parser;
pub mod render;
pub mod state;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::HandoffState;
pub use parser::parse_handoff;
pub use render::render_handoff;
pub use state::HandoffStore;
