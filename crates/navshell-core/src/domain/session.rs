//! Session domain types
//!
//! The authentication gate persists a single flag value in the session
//! store. `SessionState` is the explicit in-memory representation of that
//! flag, so no code outside the store adapter reads ambient storage
//! directly.

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// The flag value that marks a signed-in session
///
/// Anything other than this exact string (including absence) counts as
/// signed out.
pub const SESSION_FLAG_ACTIVE: &str = "true";

/// Whether the current session counts as signed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// The session flag holds the active value
    SignedIn,
    /// The session flag is absent or holds any other value
    #[default]
    SignedOut,
}

impl SessionState {
    /// Derive the state from the raw stored flag value
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(SESSION_FLAG_ACTIVE) => SessionState::SignedIn,
            _ => SessionState::SignedOut,
        }
    }

    /// Returns true if the session is signed in
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::SignedIn => write!(f, "signed_in"),
            SessionState::SignedOut => write!(f, "signed_out"),
        }
    }
}

/// A login credential pair
///
/// Presence is the only requirement: the gate performs no real credential
/// verification, so any non-empty pair is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates a credential pair, requiring both fields to be non-empty
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, DomainError> {
        let email = email.into();
        let password = password.into();
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::MissingCredentials);
        }
        Ok(Self { email, password })
    }

    /// Returns the email field
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password field
    pub fn password(&self) -> &str {
        &self.password
    }
}
