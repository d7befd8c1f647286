use crate::models::HandoffState;

/// Renders state to the canonical handoff markdown layout.
///
/// Fixed section order: header with timestamp and optional session line,
/// then Blocked On, Already Did, Next Action, Time-Sensitive, then a
/// trailing rule and footer note. Empty lists render a `- (none)`
/// placeholder; an empty next action renders `(not set)`.
pub fn render_handoff(state: &HandoffState) -> String {
    let session_line = match &state.session_id {
        Some(id) => format!("Session: {}\n", id),
        None => String::new(),
    };

    let next_action = if state.next_action.is_empty() {
        "(not set)"
    } else {
        state.next_action.as_str()
    };

    format!(
        "# Session Handoff\n\
         Last updated: {}\n\
         {}\n\
         ## Blocked On\n\
         {}\n\
         \n\
         ## Already Did\n\
         {}\n\
         \n\
         ## Next Action\n\
         {}\n\
         \n\
         ## Time-Sensitive\n\
         {}\n\
         \n\
         ---\n\
         *Auto-generated handoff snapshot. Read this first when resuming work.*\n",
        state.timestamp.format("%Y-%m-%d %H:%M:%S"),
        session_line,
        format_list(&state.blocked_on),
        format_list(&state.already_did),
        next_action,
        format_list(&state.time_sensitive),
    )
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        return "- (none)".to_string();
    }
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_handoff;

    #[test]
    fn test_render_empty_state() {
        let rendered = render_handoff(&HandoffState::new());

        assert!(rendered.starts_with("# Session Handoff\n"));
        assert_eq!(rendered.matches("- (none)").count(), 3);
        assert!(rendered.contains("## Next Action\n(not set)\n"));
        assert!(!rendered.contains("Session:"));
        assert!(rendered.ends_with(
            "*Auto-generated handoff snapshot. Read this first when resuming work.*\n"
        ));
    }

    #[test]
    fn test_render_session_line() {
        let mut state = HandoffState::new();
        state.session_id = Some("sprint-9".to_string());

        let rendered = render_handoff(&state);

        assert!(rendered.contains("\nSession: sprint-9\n"));
    }

    #[test]
    fn test_round_trip_preserves_content_fields() {
        let mut state = HandoffState::new();
        state.blocked_on = vec!["waiting on review".to_string()];
        state.already_did = vec!["shipped v1".to_string(), "shipped v1".to_string()];
        state.next_action = "Ship v2".to_string();
        state.time_sensitive = vec!["renew cert (by 2026-03-01)".to_string()];
        state.session_id = Some("s1".to_string());

        let parsed = parse_handoff(&render_handoff(&state));

        assert_eq!(parsed.blocked_on, state.blocked_on);
        assert_eq!(parsed.already_did, state.already_did);
        assert_eq!(parsed.next_action, state.next_action);
        assert_eq!(parsed.time_sensitive, state.time_sensitive);
        assert_eq!(parsed.session_id, state.session_id);
    }

    #[test]
    fn test_round_trip_empty_state() {
        let parsed = parse_handoff(&render_handoff(&HandoffState::new()));

        assert!(parsed.is_empty());
        assert_eq!(parsed.session_id, None);
    }
}
