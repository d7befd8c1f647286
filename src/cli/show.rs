//! Show command implementation
//!
//! Echoes the raw handoff document to the console. Run this at session
//! start to resume context.

use crate::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    if !path.exists() {
        println!(
            "{}",
            "No handoff file found. Starting fresh session.".yellow()
        );
        return Ok(());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let rule = "=".repeat(60);
    println!();
    println!("{}", rule.cyan());
    println!("{}", "SESSION HANDOFF - READ THIS FIRST".cyan().bold());
    println!("{}", rule.cyan());
    println!("{}", content);
    println!("{}", rule.cyan());
    println!();

    Ok(())
}
