//! Script ledger
//!
//! The explicit, ordered record of script side effects the shell has
//! replayed, plus the set of external sources already loaded. A browser
//! build would create real `<script>` elements here; the headless ledger
//! records what would run, in the order it would run.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use navshell_core::domain::PageScript;
use navshell_core::ports::IScriptRunner;

#[derive(Debug, Default)]
struct LedgerState {
    loaded: HashSet<String>,
    executed: Vec<PageScript>,
}

/// Recording implementation of the script runner port
#[derive(Debug, Default)]
pub struct ScriptLedger {
    state: Mutex<LedgerState>,
}

impl ScriptLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger pre-seeded with the external sources the shell
    /// document itself already loads
    pub fn with_preloaded<I, S>(srcs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: Mutex::new(LedgerState {
                loaded: srcs.into_iter().map(Into::into).collect(),
                executed: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, LedgerState>> {
        self.state
            .lock()
            .map_err(|_| anyhow::anyhow!("script ledger lock poisoned"))
    }

    /// Scripts executed so far, in execution order
    pub fn executed(&self) -> Vec<PageScript> {
        self.lock().map(|s| s.executed.clone()).unwrap_or_default()
    }

    /// External sources currently loaded
    pub fn loaded_srcs(&self) -> Vec<String> {
        self.lock()
            .map(|s| {
                let mut srcs: Vec<_> = s.loaded.iter().cloned().collect();
                srcs.sort();
                srcs
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl IScriptRunner for ScriptLedger {
    async fn is_loaded(&self, src: &str) -> anyhow::Result<bool> {
        Ok(self.lock()?.loaded.contains(src))
    }

    async fn run(&self, script: &PageScript) -> anyhow::Result<()> {
        let mut state = self.lock()?;
        if let Some(src) = script.src() {
            state.loaded.insert(src.to_string());
            debug!(src, "external script loaded");
        }
        state.executed.push(script.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_records_order_and_loads() {
        let ledger = ScriptLedger::new();
        ledger.run(&PageScript::external("a.js")).await.unwrap();
        ledger.run(&PageScript::inline("init()")).await.unwrap();

        let executed = ledger.executed();
        assert_eq!(executed.len(), 2);
        assert_eq!(executed[0].src(), Some("a.js"));
        assert!(ledger.is_loaded("a.js").await.unwrap());
        assert!(!ledger.is_loaded("b.js").await.unwrap());
    }

    #[tokio::test]
    async fn test_preseeded_sources_count_as_loaded() {
        let ledger = ScriptLedger::with_preloaded(["assets/js/shell.js"]);
        assert!(ledger.is_loaded("assets/js/shell.js").await.unwrap());
        assert_eq!(ledger.loaded_srcs(), vec!["assets/js/shell.js"]);
        assert!(ledger.executed().is_empty());
    }
}
