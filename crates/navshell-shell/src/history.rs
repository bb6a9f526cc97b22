//! In-memory navigation history
//!
//! A history stack with a cursor, standing in for the browser history
//! API. Forward navigations push through the `IHistory` port; traversal
//! (`back`/`forward`) is driven from outside the pipeline, exactly like
//! popstate events, and hands back the entry the pipeline should reload.

use std::sync::Mutex;

use navshell_core::domain::NavEntry;
use navshell_core::ports::IHistory;

#[derive(Debug, Default)]
struct HistoryState {
    entries: Vec<NavEntry>,
    cursor: Option<usize>,
}

/// In-memory implementation of the history port
#[derive(Debug, Default)]
pub struct MemoryHistory {
    state: Mutex<HistoryState>,
}

impl MemoryHistory {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, HistoryState>> {
        self.state
            .lock()
            .map_err(|_| anyhow::anyhow!("history lock poisoned"))
    }

    /// Steps the cursor back, returning the entry now current
    ///
    /// Returns `None` at the start of the stack (the browser would leave
    /// the shell entirely).
    pub fn back(&self) -> Option<NavEntry> {
        let mut state = self.lock().ok()?;
        match state.cursor {
            Some(cursor) if cursor > 0 => {
                state.cursor = Some(cursor - 1);
                state.entries.get(cursor - 1).cloned()
            }
            _ => None,
        }
    }

    /// Steps the cursor forward, returning the entry now current
    pub fn forward(&self) -> Option<NavEntry> {
        let mut state = self.lock().ok()?;
        match state.cursor {
            Some(cursor) if cursor + 1 < state.entries.len() => {
                state.cursor = Some(cursor + 1);
                state.entries.get(cursor + 1).cloned()
            }
            _ => None,
        }
    }

    /// Number of entries currently on the stack
    pub fn len(&self) -> usize {
        self.lock().map(|s| s.entries.len()).unwrap_or(0)
    }

    /// Returns true if no entry has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries, oldest first
    pub fn entries(&self) -> Vec<NavEntry> {
        self.lock().map(|s| s.entries.clone()).unwrap_or_default()
    }
}

impl IHistory for MemoryHistory {
    fn push(&self, entry: NavEntry) -> anyhow::Result<()> {
        let mut state = self.lock()?;
        // A push from the middle of the stack drops the forward entries,
        // matching browser pushState semantics.
        if let Some(cursor) = state.cursor {
            state.entries.truncate(cursor + 1);
        }
        state.entries.push(entry);
        state.cursor = Some(state.entries.len() - 1);
        Ok(())
    }

    fn current(&self) -> anyhow::Result<Option<NavEntry>> {
        let state = self.lock()?;
        Ok(state.cursor.and_then(|c| state.entries.get(c).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navshell_core::domain::PageUrl;

    fn entry(s: &str) -> NavEntry {
        NavEntry::new(PageUrl::new(s).unwrap())
    }

    #[test]
    fn test_push_and_current() {
        let history = MemoryHistory::new();
        assert!(history.current().unwrap().is_none());

        history.push(entry("a.html")).unwrap();
        history.push(entry("b.html")).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.current().unwrap().unwrap().url().as_str(),
            "b.html"
        );
    }

    #[test]
    fn test_back_and_forward() {
        let history = MemoryHistory::new();
        history.push(entry("a.html")).unwrap();
        history.push(entry("b.html")).unwrap();

        let back = history.back().unwrap();
        assert_eq!(back.url().as_str(), "a.html");
        assert!(history.back().is_none());

        let forward = history.forward().unwrap();
        assert_eq!(forward.url().as_str(), "b.html");
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_push_after_back_drops_forward_entries() {
        let history = MemoryHistory::new();
        history.push(entry("a.html")).unwrap();
        history.push(entry("b.html")).unwrap();
        history.back();

        history.push(entry("c.html")).unwrap();

        assert_eq!(history.len(), 2);
        assert!(history.forward().is_none());
        assert_eq!(
            history.current().unwrap().unwrap().url().as_str(),
            "c.html"
        );
    }
}
