//! Notifier port (driven/secondary port)
//!
//! Blocking user notifications. The auth gate uses this for its one error
//! case (missing login fields); implementations may render a dialog, a
//! console line, or a desktop notification.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Severity of a notice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Informational message
    #[default]
    Info,
    /// Something the user should look at
    Warning,
    /// A failed user action
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// A notification to display to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Short title
    pub title: String,
    /// Body text
    pub body: String,
    /// Severity level
    pub level: NoticeLevel,
}

impl Notice {
    /// Creates an informational notice
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level: NoticeLevel::Info,
        }
    }

    /// Creates an error notice
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level: NoticeLevel::Error,
        }
    }
}

/// Port trait for user notification
#[async_trait]
pub trait INotifier: Send + Sync {
    /// Delivers a notice to the user
    ///
    /// Fire-and-forget from the caller's perspective; implementations may
    /// block until the user acknowledges, but the caller does not depend
    /// on any response.
    async fn notify(&self, notice: &Notice) -> anyhow::Result<()>;
}
