//! Auth commands - Login, Logout, and Status for the authentication gate
//!
//! Provides the `navshell auth` CLI subcommands which:
//! 1. `login`  - Validates field presence, writes the session flag to the
//!    file store, and reports the dashboard location to continue at.
//! 2. `logout` - Clears the entire session store.
//! 3. `status` - Shows the current session state without redirecting.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use navshell_core::{
    config::Config,
    usecases::{AuthGateUseCase, LoginOutcome},
};
use navshell_shell::HeadlessView;
use navshell_store::FileSessionStore;

use crate::notify::ConsoleNotifier;
use crate::output::{get_formatter, OutputFormat, OutputFormatter};

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in (any non-empty email/password pair is accepted)
    Login {
        /// Email address
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session and sign out
    Logout,
    /// Check the current session state
    Status,
}

impl AuthCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let config = load_config(config_path);
        let gate = build_gate(&config)?;

        match self {
            AuthCommand::Login { email, password } => {
                self.execute_login(&gate, &config, email, password, &*fmt).await
            }
            AuthCommand::Logout => self.execute_logout(&gate, &config, &*fmt).await,
            AuthCommand::Status => self.execute_status(&gate, &*fmt, format).await,
        }
    }

    async fn execute_login(
        &self,
        gate: &AuthGateUseCase,
        config: &Config,
        email: &str,
        password: &str,
        fmt: &dyn OutputFormatter,
    ) -> Result<()> {
        match gate.login(email, password).await? {
            LoginOutcome::LoggedIn => {
                info!(email, "session flag stored");
                fmt.success("Signed in");
                fmt.info(&format!("Continue at {}", config.auth.dashboard_page));
            }
            LoginOutcome::MissingFields => {
                // The notifier already delivered the blocking notice.
                fmt.error("Login rejected: email and password are both required");
            }
        }
        Ok(())
    }

    async fn execute_logout(
        &self,
        gate: &AuthGateUseCase,
        config: &Config,
        fmt: &dyn OutputFormatter,
    ) -> Result<()> {
        gate.logout().await?;
        fmt.success("Signed out, session cleared");
        fmt.info(&format!("Continue at {}", config.auth.login_page));
        Ok(())
    }

    async fn execute_status(
        &self,
        gate: &AuthGateUseCase,
        fmt: &dyn OutputFormatter,
        format: OutputFormat,
    ) -> Result<()> {
        let state = gate.session_state().await?;
        if format == OutputFormat::Json {
            fmt.print_json(&serde_json::json!({ "state": state.to_string() }));
        } else if state.is_signed_in() {
            fmt.success("Signed in");
        } else {
            fmt.info("Signed out");
        }
        Ok(())
    }
}

/// Loads configuration from the given path or the default location
pub fn load_config(config_path: Option<&str>) -> Config {
    match config_path {
        Some(path) => Config::load_or_default(Path::new(path)),
        None => Config::load_or_default(&Config::default_path()),
    }
}

/// Wires the auth gate over the file store and console adapters
pub fn build_gate(config: &Config) -> Result<AuthGateUseCase> {
    let store = FileSessionStore::open(FileSessionStore::default_path())
        .context("Failed to open session store")?;
    Ok(AuthGateUseCase::new(
        Arc::new(store),
        Arc::new(ConsoleNotifier),
        Arc::new(HeadlessView::new()),
        config.auth.clone(),
    ))
}
