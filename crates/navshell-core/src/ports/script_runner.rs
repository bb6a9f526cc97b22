//! Script runner port (driven/secondary port)
//!
//! Replays the side effects of a fetched page's scripts inside the shell.
//! The navigate use case invokes scripts one at a time, in document order,
//! so execution order always matches source order.
//!
//! ## Design Notes
//!
//! - `is_loaded` backs the duplicate-load guard: an external script whose
//!   `src` the shell has already loaded is skipped, never re-run.
//! - Runner failures are non-fatal by contract: the caller logs and
//!   continues with the next script.

use async_trait::async_trait;

use crate::domain::PageScript;

/// Port trait for sequential script side-effect replay
#[async_trait]
pub trait IScriptRunner: Send + Sync {
    /// Returns true if an external script with this exact `src` URL has
    /// already been loaded into the shell
    async fn is_loaded(&self, src: &str) -> anyhow::Result<bool>;

    /// Runs one script, recording external `src` loads for future
    /// duplicate checks
    async fn run(&self, script: &PageScript) -> anyhow::Result<()>;
}
