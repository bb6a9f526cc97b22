//! History port (driven/secondary port)
//!
//! Forward-navigation recording. The application only ever pushes entries
//! and inspects the current one; traversal (back/forward) originates
//! outside the pipeline and re-enters it as a navigation with
//! `push = false`, so no traversal methods appear here.

use crate::domain::NavEntry;

/// Port trait for the navigation history stack
pub trait IHistory: Send + Sync {
    /// Pushes a new entry for a committed forward navigation
    fn push(&self, entry: NavEntry) -> anyhow::Result<()>;

    /// Returns the entry the history is currently positioned at, if any
    fn current(&self) -> anyhow::Result<Option<NavEntry>>;
}
