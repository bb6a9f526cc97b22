//! Page fetcher port (driven/secondary port)
//!
//! Retrieves the raw markup of a target page. The navigate use case treats
//! every error from this port identically: abandon fragment loading and
//! fall back to a full-document navigation. The error taxonomy exists for
//! logging and for the CLI's fallback report, not for recovery logic.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::PageUrl;

/// Errors from fetching a page document
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server responded with a non-success status
    #[error("request for {url} returned status {status}")]
    Status {
        /// The requested URL
        url: String,
        /// The HTTP status code
        status: u16,
    },

    /// The request failed at the transport level
    #[error("network error fetching {url}: {message}")]
    Network {
        /// The requested URL
        url: String,
        /// Transport error description
        message: String,
    },

    /// The URL could not be resolved into a request target
    #[error("cannot resolve request URL {url}: {message}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Resolution error description
        message: String,
    },
}

/// Port trait for fetching raw page documents
///
/// ## Implementation Notes
///
/// - Implementations must disable response caching (the shell always wants
///   the current document text).
/// - The returned string is the unparsed document body; parsing belongs to
///   [`IFragmentExtractor`](super::IFragmentExtractor).
#[async_trait]
pub trait IPageFetcher: Send + Sync {
    /// Fetches the raw document text for the given URL
    async fn fetch(&self, url: &PageUrl) -> Result<String, FetchError>;
}
