use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// State to persist across sessions.
///
/// List invariants are enforced by the store's mutators, not here:
/// `blocked_on` and `time_sensitive` hold no duplicate entries, while
/// `already_did` is an append-only log where repeats are legitimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffState {
    /// Items currently blocking progress (insertion order preserved)
    pub blocked_on: Vec<String>,

    /// Log of completed items
    pub already_did: Vec<String>,

    /// The immediate next action (most important field, last write wins)
    pub next_action: String,

    /// Tracked items, each optionally carrying a "(by <deadline>)" suffix
    pub time_sensitive: Vec<String>,

    /// Instant of the last save
    pub timestamp: DateTime<Local>,

    /// Optional session identifier, for tracking only
    #[serde(default)]
    pub session_id: Option<String>,
}

impl HandoffState {
    /// Fresh state: empty fields, current timestamp
    pub fn new() -> Self {
        Self {
            blocked_on: Vec::new(),
            already_did: Vec::new(),
            next_action: String::new(),
            time_sensitive: Vec::new(),
            timestamp: Local::now(),
            session_id: None,
        }
    }

    /// True when nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.blocked_on.is_empty()
            && self.already_did.is_empty()
            && self.next_action.is_empty()
            && self.time_sensitive.is_empty()
    }
}

impl Default for HandoffState {
    fn default() -> Self {
        Self::new()
    }
}
