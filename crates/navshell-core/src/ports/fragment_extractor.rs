//! Fragment extractor port (driven/secondary port)
//!
//! Turns fetched markup into an [`ExtractedPage`]: parse the document,
//! drop top-level chrome, locate the content region, normalize
//! standalone-layout padding, and collect the ordered script list.
//!
//! ## Design Notes
//!
//! - Extraction is pure CPU work over an owned string, so the trait is
//!   synchronous; the suspension points of a navigation are all in the
//!   fetcher.
//! - HTML parsing itself cannot fail (the parser is error-recovering the
//!   way browsers are), so the only extraction error is the absence of a
//!   usable content region.

use thiserror::Error;

use crate::domain::ExtractedPage;

/// Errors from extracting a fragment out of fetched markup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Neither the designated container nor a fallback content-sectioning
    /// element exists outside the document's chrome
    #[error("document has no identifiable content region")]
    NoContentRegion,
}

/// Port trait for parsing fetched pages into shell-ready fragments
pub trait IFragmentExtractor: Send + Sync {
    /// Parses the document text and extracts its content fragment and
    /// script list
    fn extract(&self, html: &str) -> Result<ExtractedPage, ExtractError>;
}
