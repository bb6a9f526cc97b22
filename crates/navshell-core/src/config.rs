//! Configuration module for Navshell.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation, and defaults. Every section has working
//! defaults, so a missing config file yields a usable setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level configuration for Navshell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shell: ShellConfig,
    pub auth: AuthConfig,
    pub fetch: FetchConfig,
    pub logging: LoggingConfig,
}

/// Shell and navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Element id of the content container, in the shell and in fetched
    /// pages.
    pub container_id: String,
    /// Content page loaded when the current path names no page.
    pub default_page: String,
    /// The generic entry document; landing on it loads `default_page`.
    pub entry_page: String,
}

/// Authentication gate settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Storage key holding the session flag.
    pub session_key: String,
    /// Location of the login page, the target of auth redirects.
    pub login_page: String,
    /// Location the gate navigates to after a successful login.
    pub dashboard_page: String,
}

/// Page fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Origin that relative page URLs resolve against. `None` means page
    /// URLs must already be absolute.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
    /// Optional log file; stderr when absent.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/navshell/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("navshell")
            .join("config.yaml")
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            container_id: "main-content".to_string(),
            default_page: "code.html".to_string(),
            entry_page: "index.html".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_key: "isLoggedIn".to_string(),
            login_page: "../authentication_page/code.html".to_string(),
            dashboard_page: "../dashboard_page/dashboard_path.html".to_string(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"shell.container_id"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- shell ---
        for (field, value) in [
            ("shell.container_id", &self.shell.container_id),
            ("shell.default_page", &self.shell.default_page),
            ("shell.entry_page", &self.shell.entry_page),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError {
                    field: field.into(),
                    message: "must not be empty".into(),
                });
            }
        }

        // --- auth ---
        for (field, value) in [
            ("auth.session_key", &self.auth.session_key),
            ("auth.login_page", &self.auth.login_page),
            ("auth.dashboard_page", &self.auth.dashboard_page),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError {
                    field: field.into(),
                    message: "must not be empty".into(),
                });
            }
        }

        // --- fetch ---
        if self.fetch.timeout_secs == 0 {
            errors.push(ValidationError {
                field: "fetch.timeout_secs".into(),
                message: "must be greater than 0".into(),
            });
        }
        if let Some(base_url) = &self.fetch.base_url {
            if base_url.trim().is_empty() {
                errors.push(ValidationError {
                    field: "fetch.base_url".into(),
                    message: "must not be empty when set".into(),
                });
            }
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_locations() {
        let config = Config::default();
        assert_eq!(config.shell.container_id, "main-content");
        assert_eq!(config.shell.default_page, "code.html");
        assert_eq!(config.shell.entry_page, "index.html");
        assert_eq!(config.auth.session_key, "isLoggedIn");
        assert_eq!(config.auth.login_page, "../authentication_page/code.html");
        assert_eq!(
            config.auth.dashboard_page,
            "../dashboard_page/dashboard_path.html"
        );
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.fetch.base_url.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "shell:\n  default_page: home.html\nfetch:\n  base_url: http://localhost:9000\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.shell.default_page, "home.html");
        // Untouched fields keep their defaults.
        assert_eq!(config.shell.container_id, "main-content");
        assert_eq!(
            config.fetch.base_url.as_deref(),
            Some("http://localhost:9000")
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/navshell.yaml"));
        assert_eq!(config.shell.default_page, "code.html");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_error() {
        let mut config = Config::default();
        config.shell.container_id = String::new();
        config.fetch.timeout_secs = 0;
        config.logging.level = "verbose".to_string();

        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["shell.container_id", "fetch.timeout_secs", "logging.level"]
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            field: "fetch.timeout_secs".into(),
            message: "must be greater than 0".into(),
        };
        assert_eq!(err.to_string(), "fetch.timeout_secs: must be greater than 0");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.shell.container_id, config.shell.container_id);
        assert_eq!(back.auth.session_key, config.auth.session_key);
    }
}
