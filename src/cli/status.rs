use crate::state::HandoffStore;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(path: &Path, json: bool) -> Result<()> {
    let store = HandoffStore::load(path)?;
    let state = store.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Handoff status: {}", path.display()).cyan().bold()
    );
    println!();

    if let Some(session_id) = &state.session_id {
        println!("   Session: {}", session_id);
    }

    if state.next_action.is_empty() {
        println!("   Next:    {}", "(not set)".bright_black());
    } else {
        println!("   Next:    {}", state.next_action.green().bold());
    }

    println!();
    print_section("🚧 Blocked On", &state.blocked_on);
    print_section("✅ Already Did", &state.already_did);
    print_section("⏰ Time-Sensitive", &state.time_sensitive);

    Ok(())
}

fn print_section(title: &str, items: &[String]) {
    println!("   {} ({})", title.bold(), items.len());
    if items.is_empty() {
        println!("      {}", "(none)".bright_black());
    }
    for item in items {
        println!("      - {}", item);
    }
    println!();
}
