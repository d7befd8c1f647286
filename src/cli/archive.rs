use crate::state::HandoffStore;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(path: &Path, to: Option<&Path>) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("No handoff file at {}", path.display());
    }

    let mut store = HandoffStore::load(path)?;
    let archive_path = store.archive_and_reset(to)?;

    println!("{}", "📦 Archived and reset for new session".green().bold());
    println!("   Archive: {}", archive_path.display());
    println!(
        "   Carried over: {} blocked, {} time-sensitive",
        store.state().blocked_on.len(),
        store.state().time_sensitive.len()
    );

    Ok(())
}
