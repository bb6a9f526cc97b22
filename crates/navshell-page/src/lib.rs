//! Navshell Page - HTML fetching and fragment extraction
//!
//! Driven adapters for the two page-facing ports of `navshell-core`:
//!
//! - [`HttpPageFetcher`] - `IPageFetcher` over reqwest, caching disabled,
//!   relative URLs resolved against a configurable base origin
//! - [`HtmlFragmentExtractor`] - `IFragmentExtractor` over an
//!   error-recovering HTML5 parse: chrome stripping, content-region
//!   lookup, padding normalization, and script collection
//!
//! ## Usage
//!
//! ```rust,no_run
//! use navshell_core::config::{FetchConfig, ShellConfig};
//! use navshell_core::ports::{IFragmentExtractor, IPageFetcher};
//! use navshell_page::{HtmlFragmentExtractor, HttpPageFetcher};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let fetch_config = FetchConfig {
//!     base_url: Some("http://localhost:8080".to_string()),
//!     ..FetchConfig::default()
//! };
//! let fetcher = HttpPageFetcher::new(&fetch_config)?;
//! let extractor = HtmlFragmentExtractor::from_config(&ShellConfig::default());
//!
//! let body = fetcher.fetch(&"code.html".parse()?).await?;
//! let page = extractor.extract(&body)?;
//! println!("{}", page.fragment);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod extract;
pub mod fetcher;
pub mod normalize;

pub use document::PageDocument;
pub use extract::HtmlFragmentExtractor;
pub use fetcher::HttpPageFetcher;
