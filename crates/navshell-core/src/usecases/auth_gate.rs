//! Authentication gate use case
//!
//! Orchestrates the fake login/logout flow over the session store, the
//! notifier, and the content view. There is no credential verification by
//! design: any non-empty email/password pair signs the user in by writing
//! a single flag value to client storage. The gate is a convenience, not
//! a security boundary.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    config::AuthConfig,
    domain::{Credentials, PageUrl, SessionState, SESSION_FLAG_ACTIVE},
    ports::{IContentView, INotifier, ISessionStore, Notice},
};

/// Body of the notice shown when a login field is empty
const MISSING_FIELDS_MESSAGE: &str = "Please enter email and password";

/// Result of a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The session flag was set and the user was sent to the dashboard
    LoggedIn,
    /// A field was empty; the user was notified and nothing changed
    MissingFields,
}

/// Use case for the authentication gate
///
/// Coordinates session-flag persistence and location redirects between the
/// session store, notifier, and content view ports.
pub struct AuthGateUseCase {
    store: Arc<dyn ISessionStore>,
    notifier: Arc<dyn INotifier>,
    view: Arc<dyn IContentView>,
    config: AuthConfig,
}

impl AuthGateUseCase {
    /// Creates a new AuthGateUseCase with the required dependencies
    pub fn new(
        store: Arc<dyn ISessionStore>,
        notifier: Arc<dyn INotifier>,
        view: Arc<dyn IContentView>,
        config: AuthConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            view,
            config,
        }
    }

    /// Attempts to sign the user in
    ///
    /// This method:
    /// 1. Validates that both fields are non-empty (the only check)
    /// 2. On failure, notifies the user and leaves all state untouched
    /// 3. On success, writes the session flag and performs a full
    ///    navigation to the dashboard location
    ///
    /// # Errors
    ///
    /// Returns an error only if a port fails (storage, notification, or
    /// navigation); an empty field is a normal [`LoginOutcome`], not an
    /// error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let credentials = match Credentials::new(email, password) {
            Ok(credentials) => credentials,
            Err(_) => {
                debug!("login rejected: empty field");
                self.notifier
                    .notify(&Notice::error("Login", MISSING_FIELDS_MESSAGE))
                    .await
                    .context("Failed to deliver missing-credentials notice")?;
                return Ok(LoginOutcome::MissingFields);
            }
        };

        self.store
            .set(&self.config.session_key, SESSION_FLAG_ACTIVE)
            .await
            .context("Failed to persist session flag")?;

        let dashboard = PageUrl::new(self.config.dashboard_page.clone())
            .context("Configured dashboard location is not a valid URL")?;
        self.view
            .load_full(&dashboard)
            .context("Failed to navigate to dashboard after login")?;

        info!(email = %credentials.email(), "login accepted");
        Ok(LoginOutcome::LoggedIn)
    }

    /// Enforces the gate on a protected page
    ///
    /// Reads the session flag and, unless it holds exactly the active
    /// value, performs a full navigation to the login location. Returns
    /// the observed state so callers can report it.
    pub async fn check_auth(&self) -> Result<SessionState> {
        let flag = self
            .store
            .get(&self.config.session_key)
            .await
            .context("Failed to read session flag")?;

        let state = SessionState::from_flag(flag.as_deref());
        if !state.is_signed_in() {
            debug!("auth check failed, redirecting to login");
            let login = PageUrl::new(self.config.login_page.clone())
                .context("Configured login location is not a valid URL")?;
            self.view
                .load_full(&login)
                .context("Failed to redirect to login page")?;
        }
        Ok(state)
    }

    /// Signs the user out
    ///
    /// Clears the entire session store (not just the session key) and
    /// performs a full navigation to the login location.
    pub async fn logout(&self) -> Result<()> {
        self.store
            .clear()
            .await
            .context("Failed to clear session store")?;

        let login = PageUrl::new(self.config.login_page.clone())
            .context("Configured login location is not a valid URL")?;
        self.view
            .load_full(&login)
            .context("Failed to navigate to login page after logout")?;

        info!("logged out");
        Ok(())
    }

    /// Reports the current session state without redirecting
    pub async fn session_state(&self) -> Result<SessionState> {
        let flag = self
            .store
            .get(&self.config.session_key)
            .await
            .context("Failed to read session flag")?;
        Ok(SessionState::from_flag(flag.as_deref()))
    }
}
