//! Shell controller
//!
//! Ties the link policy, the router, the history stack, and the navigate
//! use case into the event surface a host exposes: start the shell, click
//! a link, go back, go forward. Clicks push history entries; startup and
//! traversal never do.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use navshell_core::config::ShellConfig;
use navshell_core::domain::NavOutcome;
use navshell_core::usecases::NavigateUseCase;

use crate::history::MemoryHistory;
use crate::router::{LinkAction, LinkPolicy, Router};

/// What a click resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was intercepted and navigated within the shell
    Navigated(NavOutcome),
    /// The click keeps default browser behavior (anchor, mailto, tel,
    /// external)
    DefaultBrowser,
}

/// The shell state machine driver
pub struct Shell {
    navigate: Arc<NavigateUseCase>,
    history: Arc<MemoryHistory>,
    router: Router,
}

impl Shell {
    /// Creates a shell over a wired navigate use case
    ///
    /// `history` must be the same instance the use case pushes to, so
    /// traversal and recording stay consistent.
    pub fn new(
        navigate: Arc<NavigateUseCase>,
        history: Arc<MemoryHistory>,
        config: ShellConfig,
    ) -> Self {
        Self {
            navigate,
            history,
            router: Router::new(config),
        }
    }

    /// Loads the initial fragment for the current location path
    ///
    /// No history entry is pushed; the browser already has one for the
    /// document itself.
    pub async fn start(&self, current_path: &str) -> Result<NavOutcome> {
        let target = self
            .router
            .startup_target(current_path)
            .context("Cannot resolve startup page")?;
        debug!(target = %target, "shell starting");
        self.navigate.navigate(&target, false).await
    }

    /// Handles a click on an anchor inside the sidebar or the content
    /// container
    pub async fn click(&self, href: &str) -> Result<ClickOutcome> {
        match LinkPolicy::classify(href) {
            LinkAction::Intercept(url) => {
                let outcome = self.navigate.navigate(&url, true).await?;
                Ok(ClickOutcome::Navigated(outcome))
            }
            LinkAction::Default => {
                debug!(href, "click left to default browser behavior");
                Ok(ClickOutcome::DefaultBrowser)
            }
        }
    }

    /// Traverses one entry back and reloads its fragment
    ///
    /// Returns `None` when the stack has no earlier entry (the browser
    /// would leave the shell).
    pub async fn back(&self, current_path: &str) -> Result<Option<NavOutcome>> {
        let entry = match self.history.back() {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let target = self
            .router
            .pop_target(Some(&entry), current_path)
            .context("Cannot resolve history-pop page")?;
        let outcome = self.navigate.navigate(&target, false).await?;
        Ok(Some(outcome))
    }

    /// Traverses one entry forward and reloads its fragment
    pub async fn forward(&self, current_path: &str) -> Result<Option<NavOutcome>> {
        let entry = match self.history.forward() {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let target = self
            .router
            .pop_target(Some(&entry), current_path)
            .context("Cannot resolve history-pop page")?;
        let outcome = self.navigate.navigate(&target, false).await?;
        Ok(Some(outcome))
    }

    /// The history stack backing this shell
    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }
}
