//! Session store port (driven/secondary port)
//!
//! Client-persisted key-value storage, the stand-in for browser local
//! storage. The auth gate stores exactly one flag here, but the port keeps
//! the general shape because `logout` clears the store wholesale, not just
//! the session key.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because storage errors are adapter-specific
//!   (file I/O, permissions) and don't need domain-level classification.
//! - Values are plain strings; the domain interprets them (see
//!   [`SessionState::from_flag`](crate::domain::SessionState::from_flag)).

use async_trait::async_trait;

/// Port trait for client-persisted key-value state
#[async_trait]
pub trait ISessionStore: Send + Sync {
    /// Reads the value stored under `key`, if any
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Removes the value stored under `key`, if any
    async fn remove(&self, key: &str) -> anyhow::Result<()>;

    /// Removes every entry in the store
    async fn clear(&self) -> anyhow::Result<()>;
}
