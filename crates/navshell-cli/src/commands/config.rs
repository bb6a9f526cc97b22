//! Config commands - show, initialize, validate, and locate the
//! configuration file

use anyhow::{Context, Result};
use clap::Subcommand;

use navshell_core::config::Config;

use super::auth::load_config;
use crate::output::{get_formatter, OutputFormat, OutputFormatter};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file if none exists
    Init,
    /// Validate the configuration file
    Validate,
    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);

        match self {
            ConfigCommand::Show => {
                let config = load_config(config_path);
                if format == OutputFormat::Json {
                    fmt.print_json(&serde_json::to_value(&config)?);
                } else {
                    let yaml =
                        serde_yaml::to_string(&config).context("Failed to render configuration")?;
                    fmt.block("config", &yaml);
                }
            }
            ConfigCommand::Init => {
                let path = Config::default_path();
                if path.exists() {
                    fmt.warn(&format!("Config already exists at {}", path.display()));
                    return Ok(());
                }
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .context("Failed to create config directory")?;
                }
                let yaml = serde_yaml::to_string(&Config::default())
                    .context("Failed to render default configuration")?;
                std::fs::write(&path, yaml).context("Failed to write config file")?;
                fmt.success(&format!("Wrote default config to {}", path.display()));
            }
            ConfigCommand::Validate => {
                return self.execute_validate(config_path, format, &*fmt);
            }
            ConfigCommand::Path => {
                fmt.info(&Config::default_path().display().to_string());
            }
        }
        Ok(())
    }

    fn execute_validate(
        &self,
        config_path: Option<&str>,
        format: OutputFormat,
        fmt: &dyn OutputFormatter,
    ) -> Result<()> {
        let path = match config_path {
            Some(path) => std::path::PathBuf::from(path),
            None => Config::default_path(),
        };

        // Load explicitly (not load_or_default): a broken file must be
        // reported, not silently replaced by defaults.
        let config = match Config::load(&path) {
            Ok(config) => config,
            Err(err) => {
                if !path.exists() {
                    fmt.info(&format!(
                        "No config file at {}; defaults are in effect",
                        path.display()
                    ));
                    return Ok(());
                }
                fmt.error(&format!("Failed to parse configuration: {err}"));
                fmt.info(&format!("File: {}", path.display()));
                return Ok(());
            }
        };

        let errors = config.validate();
        if format == OutputFormat::Json {
            let error_strings: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            fmt.print_json(&serde_json::json!({
                "valid": errors.is_empty(),
                "config_path": path.display().to_string(),
                "errors": error_strings,
            }));
        } else if errors.is_empty() {
            fmt.success("Configuration is valid");
            fmt.info(&format!("File: {}", path.display()));
        } else {
            fmt.error(&format!(
                "Configuration has {} error{}:",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            ));
            for error in &errors {
                fmt.info(&format!("  {} - {}", error.field, error.message));
            }
        }
        Ok(())
    }
}
