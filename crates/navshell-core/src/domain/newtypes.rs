//! Domain newtypes with validation
//!
//! Strongly-typed wrappers for domain values. Each newtype ensures data
//! validity at construction time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// A navigable page URL, as written in a link's `href`
///
/// Holds either a relative path (`code.html`, `../dashboard/index.html`)
/// or an absolute URL. Guaranteed non-empty and free of control characters.
/// Classification of hrefs that should *not* become navigations (anchors,
/// `mailto:`, external links) happens before construction, in the link
/// policy of the shell runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageUrl(String);

impl PageUrl {
    /// Create a PageUrl, validating that it is non-empty
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DomainError::InvalidUrl("<empty>".to_string()));
        }
        if url.chars().any(|c| c.is_control()) {
            return Err(DomainError::InvalidUrl(url));
        }
        Ok(Self(url))
    }

    /// Get the URL as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last path segment of the URL
    ///
    /// Used to match sidebar links against a navigation target and to
    /// resolve the page named by a location path. Mirrors the
    /// `href.split('/').pop()` convention: query strings and fragments
    /// are not stripped.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl Display for PageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageUrl {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PageUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
