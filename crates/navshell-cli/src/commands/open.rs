//! Open command - drive the fragment navigator against a real origin
//!
//! Builds the full adapter stack (HTTP fetcher, HTML extractor, headless
//! view, script ledger, history) and performs one navigation the way a
//! shell click would, printing the resulting fragment or the fallback.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use navshell_core::{domain::NavOutcome, usecases::NavigateUseCase};
use navshell_page::{HtmlFragmentExtractor, HttpPageFetcher};
use navshell_shell::{ClickOutcome, HeadlessView, MemoryHistory, ScriptLedger, Shell};

use super::auth::{build_gate, load_config};
use crate::output::{get_formatter, OutputFormat, OutputFormatter};

#[derive(Debug, Args)]
pub struct OpenCommand {
    /// Page to open (e.g. `reports.html`)
    page: String,

    /// Origin to resolve relative pages against (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Skip the authentication gate
    #[arg(long)]
    no_guard: bool,
}

impl OpenCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let mut config = load_config(config_path);
        if let Some(base_url) = &self.base_url {
            config.fetch.base_url = Some(base_url.clone());
        }

        // Protected-page behavior: enforce the gate before loading.
        if !self.no_guard {
            let gate = build_gate(&config)?;
            let state = gate.check_auth().await?;
            if !state.is_signed_in() {
                fmt.error("Not signed in");
                fmt.info(&format!("Redirected to {}", config.auth.login_page));
                return Ok(());
            }
        }

        let view = Arc::new(HeadlessView::new());
        let history = Arc::new(MemoryHistory::new());
        let ledger = Arc::new(ScriptLedger::new());
        let fetcher =
            HttpPageFetcher::new(&config.fetch).context("Failed to build page fetcher")?;
        let navigate = Arc::new(NavigateUseCase::new(
            Arc::new(fetcher),
            Arc::new(HtmlFragmentExtractor::from_config(&config.shell)),
            view.clone(),
            history.clone(),
            ledger.clone(),
            config.shell.clone(),
        ));
        let shell = Shell::new(navigate, history.clone(), config.shell.clone());

        match shell.click(&self.page).await? {
            ClickOutcome::Navigated(outcome) => {
                self.report(&outcome, &view, &ledger, &history, &*fmt, format)
            }
            ClickOutcome::DefaultBrowser => {
                fmt.info("Not a shell navigation; leaving the link to the browser");
                Ok(())
            }
        }
    }

    fn report(
        &self,
        outcome: &NavOutcome,
        view: &HeadlessView,
        ledger: &ScriptLedger,
        history: &MemoryHistory,
        fmt: &dyn OutputFormatter,
        format: OutputFormat,
    ) -> Result<()> {
        match outcome {
            NavOutcome::Injected { url } => {
                if format == OutputFormat::Json {
                    let scripts: Vec<_> = ledger
                        .executed()
                        .iter()
                        .map(|s| {
                            serde_json::json!({
                                "src": s.src(),
                                "inline": !s.is_external(),
                            })
                        })
                        .collect();
                    fmt.print_json(&serde_json::json!({
                        "url": url.as_str(),
                        "active_link": view.active_link(),
                        "fragment": view.content(),
                        "scripts": scripts,
                        "history_entries": history.len(),
                    }));
                } else {
                    fmt.success(&format!("Loaded {}", url));
                    fmt.block("fragment", &view.content());
                    for script in ledger.executed() {
                        match script.src() {
                            Some(src) => fmt.info(&format!("script: {}", src)),
                            None => fmt.info(&format!(
                                "script: <inline, {} bytes>",
                                script.text().len()
                            )),
                        }
                    }
                    if let Some(active) = view.active_link() {
                        fmt.info(&format!("active sidebar link: {}", active));
                    }
                }
                Ok(())
            }
            NavOutcome::FullLoad { url, reason } => {
                fmt.warn(&format!(
                    "Fragment load of {} fell back to a full page load: {}",
                    url, reason
                ));
                Ok(())
            }
            NavOutcome::Superseded { url } => {
                // Unreachable with a single CLI navigation, but report it
                // faithfully if it ever shows up.
                fmt.warn(&format!("Navigation to {} was superseded", url));
                Ok(())
            }
        }
    }
}
