//! Navshell Store - Client-side key-value persistence
//!
//! File-backed implementation of the `ISessionStore` port: a single JSON
//! object in the platform data directory, the stand-in for browser local
//! storage. It is a driven (secondary) adapter in the hexagonal
//! architecture.
//!
//! ## Usage
//!
//! ```no_run
//! use navshell_store::FileSessionStore;
//! use navshell_core::ports::ISessionStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = FileSessionStore::open(FileSessionStore::default_path())?;
//! store.set("isLoggedIn", "true").await?;
//! # Ok(())
//! # }
//! ```

pub mod file;

pub use file::FileSessionStore;

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds something other than a string map
    #[error("Store file is corrupt: {0}")]
    Corrupt(String),
}
