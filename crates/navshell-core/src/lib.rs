//! Navshell Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `SessionState`, `Credentials`, `PageUrl`,
//!   `ExtractedPage`, `NavEntry`, `NavOutcome`
//! - **Use cases** - `AuthGateUseCase`, `NavigateUseCase`
//! - **Port definitions** - Traits for adapters: `IPageFetcher`,
//!   `IFragmentExtractor`, `ISessionStore`, `IContentView`, `IHistory`,
//!   `IScriptRunner`, `INotifier`
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement: the HTML
//! fetcher/extractor live in `navshell-page`, the session store in
//! `navshell-store`, and the shell runtime (view, history, script ledger)
//! in `navshell-shell`. Use cases orchestrate domain entities through port
//! interfaces, so the whole navigation pipeline runs without a live browser
//! document.

pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
