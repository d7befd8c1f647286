use crate::models::HandoffState;
use chrono::Local;

/// Parses a handoff document into state.
///
/// Sections open at a `## <Name>` heading and close at the next heading or
/// a horizontal rule. Missing sections yield empty defaults; placeholder
/// items (`(none)`, `(not set)`) are discarded. Never fails, whatever the
/// input looks like.
pub fn parse_handoff(content: &str) -> HandoffState {
    HandoffState {
        blocked_on: extract_items(content, "Blocked On"),
        already_did: extract_items(content, "Already Did"),
        next_action: extract_next_action(content),
        time_sensitive: extract_items(content, "Time-Sensitive"),
        timestamp: Local::now(),
        session_id: extract_session_id(content),
    }
}

/// Extract `- ` list items from a named section
fn extract_items(content: &str, section: &str) -> Vec<String> {
    let heading = format!("## {}", section);
    let mut items = Vec::new();
    let mut in_section = false;

    for line in content.lines() {
        if line.starts_with(&heading) {
            in_section = true;
            continue;
        }
        if line.starts_with("## ") || line.starts_with("---") {
            in_section = false;
            continue;
        }
        if in_section {
            if let Some(rest) = line.trim().strip_prefix('-') {
                let item = rest.trim();
                if !item.is_empty() && item != "(none)" {
                    items.push(item.to_string());
                }
            }
        }
    }

    items
}

/// Extract the next action: first non-empty, non-list line of its section
fn extract_next_action(content: &str) -> String {
    let mut in_section = false;

    for line in content.lines() {
        if line.starts_with("## Next Action") {
            in_section = true;
            continue;
        }
        if line.starts_with("## ") || line.starts_with("---") {
            in_section = false;
            continue;
        }
        if in_section {
            let text = line.trim();
            if !text.is_empty() && !text.starts_with('-') {
                if text == "(not set)" {
                    return String::new();
                }
                return text.to_string();
            }
        }
    }

    String::new()
}

/// Extract the session identifier from a `Session:` line, if present
fn extract_session_id(content: &str) -> Option<String> {
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("Session:") {
            let id = rest.trim();
            if !id.is_empty() {
                return Some(id.to_string());
            }
        }
    }
    None
}
