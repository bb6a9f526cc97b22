//! CLI subcommand implementations

pub mod auth;
pub mod completions;
pub mod config;
pub mod open;
