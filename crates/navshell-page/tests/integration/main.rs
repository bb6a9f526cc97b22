//! Integration tests for navshell-page
//!
//! Exercises the HTTP fetcher against a wiremock server and the extractor
//! against full page documents shaped like the real standalone pages.

mod common;
mod test_extract;
mod test_fetcher;
