//! Console notifier
//!
//! Implements the `INotifier` port by printing to the terminal. Errors
//! and warnings go to stderr so the blocking "alert" is visible even when
//! stdout is piped.

use async_trait::async_trait;

use navshell_core::ports::{INotifier, Notice, NoticeLevel};

/// Notifier printing notices to the terminal
pub struct ConsoleNotifier;

#[async_trait]
impl INotifier for ConsoleNotifier {
    async fn notify(&self, notice: &Notice) -> anyhow::Result<()> {
        match notice.level {
            NoticeLevel::Info => println!("[{}] {}", notice.title, notice.body),
            NoticeLevel::Warning | NoticeLevel::Error => {
                eprintln!("[{}] {}: {}", notice.level, notice.title, notice.body)
            }
        }
        Ok(())
    }
}
