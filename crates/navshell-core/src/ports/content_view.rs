//! Content view port (driven/secondary port)
//!
//! The shell's "current content root" as an explicit dependency: the one
//! mutable surface a navigation touches. In a browser this would be the
//! live document's container element plus `window.location`; the headless
//! implementation in `navshell-shell` models it as plain state, which is
//! what makes the pipeline unit-testable.
//!
//! ## Design Notes
//!
//! - Full-document navigation (`load_full`) lives on this trait rather
//!   than a separate one-method port: it is the same browser-location
//!   concern, and small single-call traits would otherwise proliferate.
//! - The view owns the invariant that exactly one content region exists:
//!   `replace_content` always replaces wholesale, never merges.

use crate::domain::PageUrl;

/// Port trait for the shell's content root and location
pub trait IContentView: Send + Sync {
    /// Replaces the content container's markup wholesale
    fn replace_content(&self, html: &str) -> anyhow::Result<()>;

    /// Marks the sidebar link whose target file name matches as active,
    /// clearing any previous active mark
    fn set_active_link(&self, file_name: &str) -> anyhow::Result<()>;

    /// Scrolls the viewport back to the top
    fn scroll_to_top(&self) -> anyhow::Result<()>;

    /// Abandons the shell and performs a full-document navigation
    ///
    /// Used by the navigator's fallback path and by the auth gate's
    /// redirects. After this call the current shell state is moot.
    fn load_full(&self, url: &PageUrl) -> anyhow::Result<()>;
}
