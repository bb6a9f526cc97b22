//! Navigation domain types
//!
//! The history record carried per entry, and the outcome taxonomy of a
//! single navigation request.

use serde::{Deserialize, Serialize};

use super::newtypes::PageUrl;

/// The state record associated with a history entry
///
/// Deliberately opaque beyond the target URL: the shell writes entries and
/// reads back only the URL on back/forward traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    url: PageUrl,
}

impl NavEntry {
    /// Creates a history entry for the given URL
    pub fn new(url: PageUrl) -> Self {
        Self { url }
    }

    /// Returns the recorded URL
    pub fn url(&self) -> &PageUrl {
        &self.url
    }
}

/// Why a navigation abandoned fragment loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The network request failed or returned a non-success status
    FetchFailed(String),
    /// The fetched document has no identifiable content region
    NoContentRegion,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::FetchFailed(msg) => write!(f, "fetch failed: {}", msg),
            FallbackReason::NoContentRegion => write!(f, "no content region in document"),
        }
    }
}

/// Result of one navigation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavOutcome {
    /// The fragment was extracted and injected into the shell
    Injected {
        /// The navigated URL
        url: PageUrl,
    },
    /// A newer navigation was issued while this one was in flight;
    /// nothing was mutated
    Superseded {
        /// The abandoned URL
        url: PageUrl,
    },
    /// Fragment loading was abandoned in favor of a full-document load
    FullLoad {
        /// The navigated URL
        url: PageUrl,
        /// Why the fragment path was abandoned
        reason: FallbackReason,
    },
}

impl NavOutcome {
    /// Returns true if the fragment was injected
    pub fn is_injected(&self) -> bool {
        matches!(self, NavOutcome::Injected { .. })
    }

    /// Returns true if the navigation degraded to a full-document load
    pub fn is_full_load(&self) -> bool {
        matches!(self, NavOutcome::FullLoad { .. })
    }

    /// Returns the URL this outcome refers to
    pub fn url(&self) -> &PageUrl {
        match self {
            NavOutcome::Injected { url }
            | NavOutcome::Superseded { url }
            | NavOutcome::FullLoad { url, .. } => url,
        }
    }
}

impl std::fmt::Display for NavOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavOutcome::Injected { url } => write!(f, "injected {}", url),
            NavOutcome::Superseded { url } => write!(f, "superseded {}", url),
            NavOutcome::FullLoad { url, reason } => {
                write!(f, "full load of {} ({})", url, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> PageUrl {
        PageUrl::new(s).unwrap()
    }

    #[test]
    fn test_nav_entry_serialization() {
        let entry = NavEntry::new(url("page.html"));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, "{\"url\":\"page.html\"}");

        let back: NavEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_outcome_predicates() {
        let injected = NavOutcome::Injected {
            url: url("a.html"),
        };
        assert!(injected.is_injected());
        assert!(!injected.is_full_load());

        let fallback = NavOutcome::FullLoad {
            url: url("b.html"),
            reason: FallbackReason::NoContentRegion,
        };
        assert!(fallback.is_full_load());
        assert_eq!(fallback.url().as_str(), "b.html");
    }

    #[test]
    fn test_fallback_reason_display() {
        assert_eq!(
            FallbackReason::FetchFailed("status 404".to_string()).to_string(),
            "fetch failed: status 404"
        );
        assert_eq!(
            FallbackReason::NoContentRegion.to_string(),
            "no content region in document"
        );
    }
}
