//! Link interception policy and navigation routing
//!
//! `LinkPolicy` decides whether a clicked href belongs to the fragment
//! navigator or to the browser. `Router` resolves the fuzzier inputs --
//! the location path at startup and popped history entries -- into the
//! concrete page the pipeline should load.

use navshell_core::config::ShellConfig;
use navshell_core::domain::{DomainError, NavEntry, PageUrl};

/// What should happen to a clicked link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Intercept and navigate within the shell
    Intercept(PageUrl),
    /// Leave it to default browser behavior
    Default,
}

/// Classification of clicked hrefs
///
/// Same-page anchors, `mailto:`/`tel:` links, and absolute external URLs
/// keep their default behavior; everything else is a shell navigation.
pub struct LinkPolicy;

impl LinkPolicy {
    /// Classifies a raw href as written in the anchor
    pub fn classify(href: &str) -> LinkAction {
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
            || href.starts_with("http")
        {
            return LinkAction::Default;
        }
        match PageUrl::new(href) {
            Ok(url) => LinkAction::Intercept(url),
            Err(_) => LinkAction::Default,
        }
    }
}

/// Resolves startup and history-pop navigation targets
pub struct Router {
    config: ShellConfig,
}

impl Router {
    /// Creates a router over the shell configuration
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    /// The page the shell should load on startup
    ///
    /// An empty path or the generic entry document resolves to the
    /// default content page; anything else loads the page the path
    /// names.
    pub fn startup_target(&self, current_path: &str) -> Result<PageUrl, DomainError> {
        let current = last_segment(current_path);
        if current.is_empty() || current == self.config.entry_page {
            PageUrl::new(self.config.default_page.clone())
        } else {
            PageUrl::new(current)
        }
    }

    /// The page a history pop should reload
    ///
    /// Prefers the popped entry's URL, then the current path's file name,
    /// then the default page.
    pub fn pop_target(
        &self,
        entry: Option<&NavEntry>,
        current_path: &str,
    ) -> Result<PageUrl, DomainError> {
        if let Some(entry) = entry {
            return Ok(entry.url().clone());
        }
        let current = last_segment(current_path);
        if current.is_empty() {
            PageUrl::new(self.config.default_page.clone())
        } else {
            PageUrl::new(current)
        }
    }
}

/// Last `/`-separated segment of a location path
fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_mailto_tel_external_pass_through() {
        for href in ["#top", "mailto:ops@example.com", "tel:+15551212", "http://example.com/x.html", "https://example.com"] {
            assert_eq!(LinkPolicy::classify(href), LinkAction::Default, "{href}");
        }
    }

    #[test]
    fn test_relative_pages_intercepted() {
        match LinkPolicy::classify("reports.html") {
            LinkAction::Intercept(url) => assert_eq!(url.as_str(), "reports.html"),
            other => panic!("expected interception, got {other:?}"),
        }
        assert!(matches!(
            LinkPolicy::classify("../settings_page/settings.html"),
            LinkAction::Intercept(_)
        ));
    }

    #[test]
    fn test_empty_href_passes_through() {
        assert_eq!(LinkPolicy::classify(""), LinkAction::Default);
    }

    #[test]
    fn test_startup_targets() {
        let router = Router::new(ShellConfig::default());

        // Empty path and the entry document both land on the default page.
        assert_eq!(router.startup_target("").unwrap().as_str(), "code.html");
        assert_eq!(
            router.startup_target("/app/index.html").unwrap().as_str(),
            "code.html"
        );
        // A named page loads itself.
        assert_eq!(
            router.startup_target("/app/reports.html").unwrap().as_str(),
            "reports.html"
        );
    }

    #[test]
    fn test_pop_targets() {
        let router = Router::new(ShellConfig::default());
        let entry = NavEntry::new(PageUrl::new("reports.html").unwrap());

        assert_eq!(
            router.pop_target(Some(&entry), "/app/other.html").unwrap().as_str(),
            "reports.html"
        );
        assert_eq!(
            router.pop_target(None, "/app/other.html").unwrap().as_str(),
            "other.html"
        );
        assert_eq!(router.pop_target(None, "").unwrap().as_str(), "code.html");
    }
}
