//! HandoffStore - HANDOFF.md CRUD operations

use crate::models::HandoffState;
use crate::parser::parse_handoff;
use crate::render::render_handoff;
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};

/// Store for a single handoff document.
///
/// Single-writer by assumption: one process owns one handoff file, saves
/// replace the whole file, and the last save wins. Dropping a store with
/// unsaved mutations performs a best-effort final flush, so an interrupted
/// session still lands its state on disk; call `save` explicitly when the
/// write failure needs to reach the caller.
pub struct HandoffStore {
    path: PathBuf,
    state: HandoffState,
    dirty: bool,
}

impl HandoffStore {
    /// Load existing handoff state or initialize fresh
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let state = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_handoff(&content)
        } else {
            HandoffState::new()
        };

        Ok(Self {
            path,
            state,
            dirty: false,
        })
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &HandoffState {
        &self.state
    }

    /// Get an owned snapshot of current state for introspection
    pub fn snapshot(&self) -> HandoffState {
        self.state.clone()
    }

    /// Get the handoff file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Add item to "Blocked On"; double-blocking the same item is a no-op
    pub fn mark_blocked(&mut self, item: &str) {
        if !self.state.blocked_on.iter().any(|b| b == item) {
            self.state.blocked_on.push(item.to_string());
            self.dirty = true;
        }
    }

    /// Mark item as completed: appends to "Already Did" and removes any
    /// identical entry from "Blocked On"
    pub fn mark_completed(&mut self, item: &str) {
        self.state.already_did.push(item.to_string());
        self.state.blocked_on.retain(|b| b != item);
        self.dirty = true;
    }

    /// Set the immediate next action (last write wins)
    pub fn set_next_action(&mut self, action: impl Into<String>) {
        self.state.next_action = action.into();
        self.dirty = true;
    }

    /// Add a time-sensitive item, rendered as `"<item> (by <deadline>)"`
    /// when a deadline is given; duplicate rendered entries are ignored
    pub fn add_time_sensitive(&mut self, item: &str, deadline: Option<&str>) {
        let entry = match deadline {
            Some(by) => format!("{} (by {})", item, by),
            None => item.to_string(),
        };
        if !self.state.time_sensitive.contains(&entry) {
            self.state.time_sensitive.push(entry);
            self.dirty = true;
        }
    }

    /// Remove item from "Blocked On" without marking it complete
    pub fn unblock(&mut self, item: &str) {
        let before = self.state.blocked_on.len();
        self.state.blocked_on.retain(|b| b != item);
        if self.state.blocked_on.len() != before {
            self.dirty = true;
        }
    }

    /// Remove every time-sensitive entry containing the given substring.
    /// Returns how many entries were removed.
    pub fn clear_time_sensitive(&mut self, pattern: &str) -> usize {
        let before = self.state.time_sensitive.len();
        self.state.time_sensitive.retain(|t| !t.contains(pattern));
        let removed = before - self.state.time_sensitive.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    /// Clear the "Already Did" log (use at session start)
    pub fn clear_already_did(&mut self) {
        if !self.state.already_did.is_empty() {
            self.state.already_did.clear();
            self.dirty = true;
        }
    }

    /// Set session identifier (optional, for tracking)
    pub fn set_session_id(&mut self, session_id: impl Into<String>) {
        self.state.session_id = Some(session_id.into());
        self.dirty = true;
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save current state to the handoff file.
    ///
    /// The write is an atomic replace: either the file holds the new
    /// rendering in full, or the prior content is left untouched.
    pub fn save(&mut self) -> Result<()> {
        self.state.timestamp = Local::now();

        let content = render_handoff(&self.state);
        write_atomic(&self.path, &content)?;

        self.dirty = false;
        Ok(())
    }

    /// Save only if mutated since the last save
    pub fn save_if_dirty(&mut self) -> Result<()> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }

    /// Archive current state, then reset for a new session.
    ///
    /// Writes the current rendering to `archive_path` (default: the primary
    /// path with a unix-timestamp suffix), clears the completed log and next
    /// action, keeps blocked and time-sensitive items, and saves the primary
    /// file. Returns the archive path actually written.
    pub fn archive_and_reset(&mut self, archive_path: Option<&Path>) -> Result<PathBuf> {
        let archive_path = match archive_path {
            Some(p) => p.to_path_buf(),
            None => default_archive_path(&self.path),
        };

        let content = render_handoff(&self.state);
        write_atomic(&archive_path, &content)?;

        self.state.already_did.clear();
        self.state.next_action.clear();
        self.save()?;

        Ok(archive_path)
    }
}

impl Drop for HandoffStore {
    /// Best-effort final flush for unsaved mutations. Errors cannot surface
    /// from a destructor; an explicit `save` is the error-reporting path.
    fn drop(&mut self) {
        if self.dirty {
            let _ = self.save();
        }
    }
}

/// Atomic full-file replace: write to a temp file in the target directory,
/// then rename over the destination
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let temp = tempfile::NamedTempFile::new_in(&dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    std::fs::write(temp.path(), content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    temp.persist(path)
        .map_err(|e| anyhow::anyhow!("Failed to persist {}: {}", path.display(), e))?;

    Ok(())
}

/// Derive the default archive path: `HANDOFF.md` -> `HANDOFF.<unix-secs>.md`
fn default_archive_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("HANDOFF");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("md");
    path.with_file_name(format!("{}.{}.{}", stem, Utc::now().timestamp(), ext))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("HANDOFF.md");
        (temp_dir, path)
    }

    #[test]
    fn test_load_missing_file_starts_fresh() {
        let (_temp, path) = setup();

        let store = HandoffStore::load(&path).unwrap();

        assert!(store.state().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_mark_blocked_is_idempotent() {
        let (_temp, path) = setup();
        let mut store = HandoffStore::load(&path).unwrap();

        store.mark_blocked("waiting on review");
        store.mark_blocked("waiting on review");

        assert_eq!(store.state().blocked_on, vec!["waiting on review"]);
    }

    #[test]
    fn test_completed_removes_from_blocked() {
        let (_temp, path) = setup();
        let mut store = HandoffStore::load(&path).unwrap();

        store.mark_blocked("A");
        store.mark_completed("A");

        assert!(store.state().blocked_on.is_empty());
        assert_eq!(store.state().already_did, vec!["A"]);
    }

    #[test]
    fn test_completed_log_allows_duplicates() {
        let (_temp, path) = setup();
        let mut store = HandoffStore::load(&path).unwrap();

        store.mark_completed("retry deploy");
        store.mark_completed("retry deploy");

        assert_eq!(store.state().already_did.len(), 2);
    }

    #[test]
    fn test_unblock_without_completion() {
        let (_temp, path) = setup();
        let mut store = HandoffStore::load(&path).unwrap();

        store.mark_blocked("X");
        store.unblock("X");

        assert!(store.state().blocked_on.is_empty());
        assert!(store.state().already_did.is_empty());
    }

    #[test]
    fn test_time_sensitive_deadline_rendering() {
        let (_temp, path) = setup();
        let mut store = HandoffStore::load(&path).unwrap();

        store.add_time_sensitive("renew cert", Some("2026-03-01"));
        store.add_time_sensitive("renew cert", Some("2026-03-01"));
        store.add_time_sensitive("ping Ariel", None);

        assert_eq!(
            store.state().time_sensitive,
            vec!["renew cert (by 2026-03-01)", "ping Ariel"]
        );
    }

    #[test]
    fn test_clear_time_sensitive_matches_substring() {
        let (_temp, path) = setup();
        let mut store = HandoffStore::load(&path).unwrap();

        store.add_time_sensitive("renew cert", Some("2026-03-01"));
        store.add_time_sensitive("renew domain", Some("2026-04-01"));
        store.add_time_sensitive("ping Ariel", None);

        let removed = store.clear_time_sensitive("renew");

        assert_eq!(removed, 2);
        assert_eq!(store.state().time_sensitive, vec!["ping Ariel"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp, path) = setup();

        {
            let mut store = HandoffStore::load(&path).unwrap();
            store.set_next_action("Ship v2");
            store.mark_blocked("waiting on review");
            store.add_time_sensitive("renew cert", Some("2026-03-01"));
            store.save().unwrap();
        }

        let store = HandoffStore::load(&path).unwrap();
        assert_eq!(store.state().next_action, "Ship v2");
        assert_eq!(store.state().blocked_on, vec!["waiting on review"]);
        assert_eq!(
            store.state().time_sensitive,
            vec!["renew cert (by 2026-03-01)"]
        );
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let (_temp, path) = setup();
        std::fs::write(&path, "stale unrelated content").unwrap();

        let mut store = HandoffStore::load(&path).unwrap();
        store.set_next_action("fresh start");
        store.save().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("fresh start"));
        assert!(!content.contains("stale unrelated content"));
    }

    #[test]
    fn test_drop_flushes_unsaved_state() {
        let (_temp, path) = setup();

        {
            let mut store = HandoffStore::load(&path).unwrap();
            store.set_next_action("survive the interrupt");
            // no explicit save
        }

        let store = HandoffStore::load(&path).unwrap();
        assert_eq!(store.state().next_action, "survive the interrupt");
    }

    #[test]
    fn test_drop_without_mutation_writes_nothing() {
        let (_temp, path) = setup();

        {
            let _store = HandoffStore::load(&path).unwrap();
        }

        assert!(!path.exists());
    }

    #[test]
    fn test_archive_and_reset() {
        let (_temp, path) = setup();
        let mut store = HandoffStore::load(&path).unwrap();

        store.mark_completed("Y");
        store.set_next_action("Z");
        store.mark_blocked("still stuck");
        store.add_time_sensitive("still urgent", None);

        let archive_path = store.archive_and_reset(None).unwrap();

        // Primary state: log and next action reset, rest carried over
        assert!(store.state().already_did.is_empty());
        assert_eq!(store.state().next_action, "");
        assert_eq!(store.state().blocked_on, vec!["still stuck"]);
        assert_eq!(store.state().time_sensitive, vec!["still urgent"]);

        // Archive holds the pre-reset values
        let archived = std::fs::read_to_string(&archive_path).unwrap();
        assert!(archived.contains("- Y"));
        assert!(archived.contains("Z"));
    }

    #[test]
    fn test_archive_to_explicit_path() {
        let (temp, path) = setup();
        let mut store = HandoffStore::load(&path).unwrap();
        store.mark_completed("done thing");

        let target = temp.path().join("archive.md");
        let written = store.archive_and_reset(Some(&target)).unwrap();

        assert_eq!(written, target);
        assert!(target.exists());
        assert!(path.exists());
    }

    #[test]
    fn test_default_archive_path_keeps_extension() {
        let archive = default_archive_path(Path::new("/tmp/notes/HANDOFF.md"));

        let name = archive.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("HANDOFF."));
        assert!(name.ends_with(".md"));
        assert_eq!(archive.parent(), Some(Path::new("/tmp/notes")));
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let (_temp, path) = setup();
        let mut store = HandoffStore::load(&path).unwrap();
        store.mark_blocked("A");

        let mut snapshot = store.snapshot();
        snapshot.blocked_on.push("B".to_string());

        assert_eq!(store.state().blocked_on, vec!["A"]);
    }
}
