//! Headless content view
//!
//! The explicit stand-in for the shell's live document: one content
//! container, one active sidebar link, a scroll position, and a record of
//! full-document navigations the shell was asked to perform. In a browser
//! build this state maps onto the real DOM; here it is plain data, which
//! is what makes the navigation pipeline testable.

use std::sync::Mutex;

use navshell_core::domain::PageUrl;
use navshell_core::ports::IContentView;

#[derive(Debug, Default)]
struct ViewState {
    content: String,
    active_link: Option<String>,
    at_top: bool,
    full_loads: Vec<PageUrl>,
}

/// In-memory implementation of the content view port
#[derive(Debug)]
pub struct HeadlessView {
    state: Mutex<ViewState>,
}

impl Default for HeadlessView {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessView {
    /// Creates an empty view, scrolled to the top
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ViewState {
                at_top: true,
                ..ViewState::default()
            }),
        }
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, ViewState>> {
        self.state
            .lock()
            .map_err(|_| anyhow::anyhow!("view lock poisoned"))
    }

    /// Current content container markup
    pub fn content(&self) -> String {
        self.lock().map(|s| s.content.clone()).unwrap_or_default()
    }

    /// File name of the currently active sidebar link, if any
    pub fn active_link(&self) -> Option<String> {
        self.lock().ok().and_then(|s| s.active_link.clone())
    }

    /// Whether the viewport is at the top
    pub fn is_at_top(&self) -> bool {
        self.lock().map(|s| s.at_top).unwrap_or(true)
    }

    /// Simulates the user scrolling away from the top
    pub fn scroll_down(&self) {
        if let Ok(mut state) = self.lock() {
            state.at_top = false;
        }
    }

    /// The most recent full-document navigation requested, if any
    pub fn last_full_load(&self) -> Option<PageUrl> {
        self.lock().ok().and_then(|s| s.full_loads.last().cloned())
    }

    /// Every full-document navigation requested so far
    pub fn full_loads(&self) -> Vec<PageUrl> {
        self.lock().map(|s| s.full_loads.clone()).unwrap_or_default()
    }
}

impl IContentView for HeadlessView {
    fn replace_content(&self, html: &str) -> anyhow::Result<()> {
        let mut state = self.lock()?;
        state.content = html.to_string();
        Ok(())
    }

    fn set_active_link(&self, file_name: &str) -> anyhow::Result<()> {
        let mut state = self.lock()?;
        // A single slot: setting the new link inherently clears the
        // previous active mark.
        state.active_link = Some(file_name.to_string());
        Ok(())
    }

    fn scroll_to_top(&self) -> anyhow::Result<()> {
        let mut state = self.lock()?;
        state.at_top = true;
        Ok(())
    }

    fn load_full(&self, url: &PageUrl) -> anyhow::Result<()> {
        let mut state = self.lock()?;
        state.full_loads.push(url.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_is_wholesale() {
        let view = HeadlessView::new();
        view.replace_content("<p>A</p>").unwrap();
        view.replace_content("<p>B</p>").unwrap();
        assert_eq!(view.content(), "<p>B</p>");
    }

    #[test]
    fn test_active_link_single_slot() {
        let view = HeadlessView::new();
        view.set_active_link("a.html").unwrap();
        view.set_active_link("b.html").unwrap();
        assert_eq!(view.active_link().as_deref(), Some("b.html"));
    }

    #[test]
    fn test_scroll_state() {
        let view = HeadlessView::new();
        assert!(view.is_at_top());
        view.scroll_down();
        assert!(!view.is_at_top());
        view.scroll_to_top().unwrap();
        assert!(view.is_at_top());
    }

    #[test]
    fn test_full_loads_recorded_in_order() {
        let view = HeadlessView::new();
        view.load_full(&PageUrl::new("a.html").unwrap()).unwrap();
        view.load_full(&PageUrl::new("b.html").unwrap()).unwrap();
        assert_eq!(view.last_full_load().unwrap().as_str(), "b.html");
        assert_eq!(view.full_loads().len(), 2);
    }
}
