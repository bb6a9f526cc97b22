//! Fragment extractor adapter
//!
//! Implements the `IFragmentExtractor` port over [`PageDocument`].

use navshell_core::config::ShellConfig;
use navshell_core::domain::ExtractedPage;
use navshell_core::ports::{ExtractError, IFragmentExtractor};

use crate::document::PageDocument;

/// HTML-backed fragment extractor
///
/// Stateless apart from the configured content-container id.
pub struct HtmlFragmentExtractor {
    container_id: String,
}

impl HtmlFragmentExtractor {
    /// Creates an extractor looking for the given container id
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    /// Creates an extractor from the shell configuration
    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(config.container_id.clone())
    }
}

impl IFragmentExtractor for HtmlFragmentExtractor {
    fn extract(&self, html: &str) -> Result<ExtractedPage, ExtractError> {
        let doc = PageDocument::parse(html);
        let fragment = doc
            .fragment(&self.container_id)
            .ok_or(ExtractError::NoContentRegion)?;
        Ok(ExtractedPage::new(fragment, doc.scripts()))
    }
}
