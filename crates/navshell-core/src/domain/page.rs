//! Fetched-page data model
//!
//! A fetched document reduces to two things the shell cares about: the
//! normalized content-region markup, and the ordered list of scripts whose
//! side effects must be replayed. Scripts are modeled as explicit data
//! returned by the extractor and invoked sequentially by the navigate
//! pipeline, rather than as a document-mutation side effect.

use serde::{Deserialize, Serialize};

/// A script element found in a fetched document
///
/// Either external (`src` set, body usually empty) or inline (`src`
/// absent, body holds the source text). Order within [`ExtractedPage`]
/// is document order, covering both head and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageScript {
    /// External source URL, if any
    src: Option<String>,
    /// The `type` attribute, if present (e.g. `module`)
    kind: Option<String>,
    /// Inline source text (empty for pure external scripts)
    text: String,
}

impl PageScript {
    /// Creates an external script reference
    pub fn external(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            kind: None,
            text: String::new(),
        }
    }

    /// Creates an inline script
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            src: None,
            kind: None,
            text: text.into(),
        }
    }

    /// Sets the `type` attribute
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Returns the external source URL, if any
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Returns the `type` attribute, if present
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Returns the inline source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if this script loads from an external URL
    pub fn is_external(&self) -> bool {
        self.src.is_some()
    }
}

/// The usable payload of a fetched page
///
/// Produced by the fragment extractor after chrome stripping and padding
/// normalization. `fragment` is the inner markup of the content region,
/// ready for wholesale injection into the shell's container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Normalized inner markup of the content region
    pub fragment: String,
    /// Scripts to replay, in document order
    pub scripts: Vec<PageScript>,
}

impl ExtractedPage {
    /// Creates an extracted page from its parts
    pub fn new(fragment: impl Into<String>, scripts: Vec<PageScript>) -> Self {
        Self {
            fragment: fragment.into(),
            scripts,
        }
    }
}
