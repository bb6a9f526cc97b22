//! Fragment navigation use case
//!
//! The [`NavigateUseCase`] runs one same-document navigation end to end:
//!
//! 1. Issue a navigation token (stale in-flight navigations are discarded)
//! 2. Fetch the target page's raw markup, cache disabled
//! 3. Extract the content fragment and script list (chrome stripped,
//!    padding normalized) via the extractor port
//! 4. Re-check the token after the suspension point
//! 5. Inject the fragment into the content view wholesale
//! 6. Replay scripts sequentially, skipping already-loaded external ones;
//!    a failing script is logged and skipped
//! 7. Push a history entry when the navigation should be recoverable
//! 8. Highlight the matching sidebar link and scroll to the top
//!
//! Fetch and extraction failures share one recovery policy: abandon the
//! fragment path and request a full-document navigation, which is always
//! correct because every page is independently a complete document.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    config::ShellConfig,
    domain::{FallbackReason, NavEntry, NavOutcome, PageUrl},
    ports::{IContentView, IFragmentExtractor, IHistory, IPageFetcher, IScriptRunner},
};

/// Use case for same-document navigation
///
/// Holds the injected ports plus the monotonically increasing navigation
/// sequence used to detect overlapping navigations: a completion whose
/// token is no longer the newest issued one mutates nothing.
pub struct NavigateUseCase {
    fetcher: Arc<dyn IPageFetcher>,
    extractor: Arc<dyn IFragmentExtractor>,
    view: Arc<dyn IContentView>,
    history: Arc<dyn IHistory>,
    scripts: Arc<dyn IScriptRunner>,
    config: ShellConfig,
    nav_seq: AtomicU64,
}

impl NavigateUseCase {
    /// Creates a new NavigateUseCase with the required dependencies
    pub fn new(
        fetcher: Arc<dyn IPageFetcher>,
        extractor: Arc<dyn IFragmentExtractor>,
        view: Arc<dyn IContentView>,
        history: Arc<dyn IHistory>,
        scripts: Arc<dyn IScriptRunner>,
        config: ShellConfig,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            view,
            history,
            scripts,
            config,
            nav_seq: AtomicU64::new(0),
        }
    }

    /// Runs one navigation
    ///
    /// # Arguments
    ///
    /// * `url` - The target page
    /// * `push` - Whether to record a history entry; `false` for startup
    ///   and history-pop navigations, which must not create duplicates
    ///
    /// # Errors
    ///
    /// Returns an error only when a port fails outside the fallback policy
    /// (view injection, history push). Fetch and extraction failures are
    /// not errors; they resolve to [`NavOutcome::FullLoad`].
    pub async fn navigate(&self, url: &PageUrl, push: bool) -> Result<NavOutcome> {
        let token = self.nav_seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(url = %url, token, push, "navigation started");

        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(err) => {
                return self.fall_back(url, FallbackReason::FetchFailed(err.to_string()));
            }
        };

        let page = match self.extractor.extract(&body) {
            Ok(page) => page,
            Err(_) => return self.fall_back(url, FallbackReason::NoContentRegion),
        };

        // The fetch was the suspension point; if a newer navigation was
        // issued meanwhile, this one must not touch the view.
        if self.nav_seq.load(Ordering::SeqCst) != token {
            debug!(url = %url, token, "navigation superseded, discarding");
            return Ok(NavOutcome::Superseded { url: url.clone() });
        }

        self.view
            .replace_content(&page.fragment)
            .context("Failed to inject fragment into content view")?;

        self.replay_scripts(&page.scripts).await;

        if push {
            self.history
                .push(NavEntry::new(url.clone()))
                .context("Failed to push history entry")?;
        }

        self.view
            .set_active_link(url.file_name())
            .context("Failed to update active sidebar link")?;
        self.view
            .scroll_to_top()
            .context("Failed to scroll view to top")?;

        info!(url = %url, container = %self.config.container_id, "fragment injected");
        Ok(NavOutcome::Injected { url: url.clone() })
    }

    /// Replays page scripts in document order
    ///
    /// External scripts whose `src` is already loaded in the shell are
    /// skipped. Individual failures are logged and skipped; script replay
    /// never aborts a navigation.
    async fn replay_scripts(&self, scripts: &[crate::domain::PageScript]) {
        for script in scripts {
            if let Some(src) = script.src() {
                match self.scripts.is_loaded(src).await {
                    Ok(true) => {
                        debug!(src, "external script already loaded, skipping");
                        continue;
                    }
                    Ok(false) => {}
                    Err(err) => {
                        warn!(error = %err, src, "script ledger lookup failed");
                    }
                }
            }
            if let Err(err) = self.scripts.run(script).await {
                warn!(error = %err, src = ?script.src(), "script replay failed, continuing");
            }
        }
    }

    /// Universal error recovery: full-document navigation to the target
    fn fall_back(&self, url: &PageUrl, reason: FallbackReason) -> Result<NavOutcome> {
        warn!(url = %url, reason = %reason, "fragment load failed, falling back to full navigation");
        self.view
            .load_full(url)
            .context("Failed to request full-document navigation")?;
        Ok(NavOutcome::FullLoad {
            url: url.clone(),
            reason,
        })
    }
}
