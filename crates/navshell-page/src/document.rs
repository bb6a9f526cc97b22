//! Parsed page documents
//!
//! [`PageDocument`] wraps an error-recovering HTML5 parse of a fetched
//! page and answers the three questions the navigator asks:
//!
//! 1. Where is the content region? (the configured container id, else the
//!    last `main` element)
//! 2. Which parts are chrome? (direct children of `body` tagged
//!    `aside`/`header`/`footer`, plus everything beneath them)
//! 3. Which scripts must be replayed, in what order?
//!
//! Chrome is modeled as an exclusion predicate over the parsed tree rather
//! than destructive removal; candidates for extraction and script
//! collection both ignore chrome subtrees, which matches stripping the
//! chrome before querying.

use scraper::{ElementRef, Html};

use navshell_core::domain::PageScript;

use crate::normalize;

/// Tag names that count as page chrome when they sit directly under `body`
pub const CHROME_TAGS: [&str; 3] = ["aside", "header", "footer"];

/// A parsed page document
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses document text
    ///
    /// Parsing is error-recovering and cannot fail; malformed input just
    /// yields a smaller tree.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// All elements in document (pre-order) order
    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
    }

    /// True for an `aside`/`header`/`footer` that is a direct child of `body`
    fn is_top_chrome(el: &ElementRef<'_>) -> bool {
        CHROME_TAGS.contains(&el.value().name())
            && el
                .parent()
                .and_then(ElementRef::wrap)
                .map(|parent| parent.value().name() == "body")
                .unwrap_or(false)
    }

    /// True if the element sits inside a chrome subtree
    fn in_chrome(el: &ElementRef<'_>) -> bool {
        el.ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| Self::is_top_chrome(&ancestor))
    }

    /// Locates the content region
    ///
    /// Prefers the element carrying `container_id`; falls back to the
    /// *last* non-chrome `main` element, which in standalone pages is the
    /// page body rather than a decorative wrapper.
    pub fn content_region(&self, container_id: &str) -> Option<ElementRef<'_>> {
        if let Some(el) = self
            .elements()
            .find(|el| el.value().id() == Some(container_id) && !Self::in_chrome(el))
        {
            return Some(el);
        }
        self.elements()
            .filter(|el| el.value().name() == "main" && !Self::in_chrome(el))
            .last()
    }

    /// Extracts the normalized content fragment, if a region exists
    ///
    /// Returns the region's inner markup with standalone-layout padding
    /// stripped (see [`normalize::strip_standalone_padding`]).
    pub fn fragment(&self, container_id: &str) -> Option<String> {
        self.content_region(container_id)
            .map(|el| normalize::strip_standalone_padding(&el.inner_html()))
    }

    /// Collects the page's scripts in document order
    ///
    /// Covers head and body; scripts inside chrome subtrees are dropped,
    /// since their host elements never make it into the shell.
    pub fn scripts(&self) -> Vec<PageScript> {
        self.elements()
            .filter(|el| el.value().name() == "script" && !Self::in_chrome(el))
            .map(|el| {
                let script = match el.value().attr("src") {
                    Some(src) => PageScript::external(src),
                    None => PageScript::inline(el.text().collect::<String>()),
                };
                match el.value().attr("type") {
                    Some(kind) => script.with_kind(kind),
                    None => script,
                }
            })
            .collect()
    }
}
