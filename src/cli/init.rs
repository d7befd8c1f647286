use crate::state::HandoffStore;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(path: &Path, session: Option<&str>) -> Result<()> {
    if path.exists() {
        println!(
            "{}",
            format!("⚠️  {} already exists", path.display()).yellow()
        );
        println!("   Run 'handoff show' to read it, or point --file elsewhere");
        return Ok(());
    }

    let mut store = HandoffStore::load(path)?;
    if let Some(id) = session {
        store.set_session_id(id);
    }
    store.save()?;

    println!(
        "{}",
        format!("✅ Initialized {}", path.display()).green().bold()
    );
    println!("   Track state with: handoff next / block / done / remind");

    Ok(())
}
