//! Tracking commands: the mutator surface of the store.
//!
//! Each command loads the handoff file, applies one mutation, and saves.

use crate::state::HandoffStore;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn next(path: &Path, action: &str) -> Result<()> {
    let mut store = HandoffStore::load(path)?;
    store.set_next_action(action);
    store.save()?;

    println!("{}", format!("➡️  Next action: {}", action).cyan());
    Ok(())
}

pub fn block(path: &Path, item: &str) -> Result<()> {
    let mut store = HandoffStore::load(path)?;
    store.mark_blocked(item);
    store.save()?;

    println!("{}", format!("🚧 Blocked on: {}", item).yellow());
    Ok(())
}

pub fn unblock(path: &Path, item: &str) -> Result<()> {
    let mut store = HandoffStore::load(path)?;
    store.unblock(item);
    store.save()?;

    println!("{}", format!("🔓 Unblocked: {}", item).green());
    Ok(())
}

pub fn done(path: &Path, item: &str) -> Result<()> {
    let mut store = HandoffStore::load(path)?;
    store.mark_completed(item);
    store.save()?;

    println!("{}", format!("✅ Done: {}", item).green());
    Ok(())
}

pub fn remind(path: &Path, item: &str, by: Option<&str>) -> Result<()> {
    let mut store = HandoffStore::load(path)?;
    store.add_time_sensitive(item, by);
    store.save()?;

    match by {
        Some(deadline) => println!(
            "{}",
            format!("⏰ Time-sensitive: {} (by {})", item, deadline).yellow()
        ),
        None => println!("{}", format!("⏰ Time-sensitive: {}", item).yellow()),
    }
    Ok(())
}

pub fn resolve(path: &Path, pattern: &str) -> Result<()> {
    let mut store = HandoffStore::load(path)?;
    let removed = store.clear_time_sensitive(pattern);
    store.save()?;

    if removed == 0 {
        println!(
            "{}",
            format!("No time-sensitive items match '{}'", pattern).yellow()
        );
    } else {
        println!(
            "{}",
            format!("🧹 Removed {} time-sensitive item(s)", removed).green()
        );
    }
    Ok(())
}

pub fn clear_log(path: &Path) -> Result<()> {
    let mut store = HandoffStore::load(path)?;
    store.clear_already_did();
    store.save()?;

    println!("{}", "🧹 Cleared the Already Did log".green());
    Ok(())
}

pub fn session(path: &Path, id: &str) -> Result<()> {
    let mut store = HandoffStore::load(path)?;
    store.set_session_id(id);
    store.save()?;

    println!("{}", format!("🏷️  Session: {}", id).cyan());
    Ok(())
}
