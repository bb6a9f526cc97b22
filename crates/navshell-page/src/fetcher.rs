//! HTTP page fetcher
//!
//! Implements the `IPageFetcher` port over reqwest. Relative page URLs
//! (the normal case for in-shell links) are resolved against the
//! configured base origin; absolute URLs pass through. Every request
//! carries `Cache-Control: no-store` so the shell always sees the current
//! document text.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;
use url::Url;

use navshell_core::config::FetchConfig;
use navshell_core::domain::PageUrl;
use navshell_core::ports::{FetchError, IPageFetcher};

/// reqwest-backed page fetcher
pub struct HttpPageFetcher {
    client: Client,
    base_url: Option<Url>,
}

impl HttpPageFetcher {
    /// Creates a fetcher from the fetch configuration
    pub fn new(config: &FetchConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = match config.base_url.as_deref() {
            Some(raw) => Some(
                Url::parse(raw).with_context(|| format!("Invalid fetch base URL: {raw}"))?,
            ),
            None => None,
        };

        Ok(Self { client, base_url })
    }

    /// Creates a fetcher with defaults and the given base URL (useful for
    /// testing against a local server)
    pub fn with_base_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Self::new(&FetchConfig {
            base_url: Some(base_url.into()),
            ..FetchConfig::default()
        })
    }

    /// Resolves a page URL into an absolute request target
    fn resolve(&self, url: &PageUrl) -> Result<Url, FetchError> {
        if let Ok(absolute) = Url::parse(url.as_str()) {
            return Ok(absolute);
        }
        match &self.base_url {
            Some(base) => base.join(url.as_str()).map_err(|err| FetchError::InvalidUrl {
                url: url.as_str().to_string(),
                message: err.to_string(),
            }),
            None => Err(FetchError::InvalidUrl {
                url: url.as_str().to_string(),
                message: "relative URL with no base_url configured".to_string(),
            }),
        }
    }
}

#[async_trait]
impl IPageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &PageUrl) -> Result<String, FetchError> {
        let target = self.resolve(url)?;
        debug!(url = %target, "fetching page");

        let response = self
            .client
            .get(target.clone())
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|err| FetchError::Network {
                url: target.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: target.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|err| FetchError::Network {
            url: target.to_string(),
            message: err.to_string(),
        })
    }
}
