//! Navshell CLI - Command-line interface for the page shell
//!
//! Provides commands for:
//! - The authentication gate (login, logout, status)
//! - Opening pages through the fragment navigator
//! - Viewing and initializing configuration
//! - Generating shell completions

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod notify;
mod output;

use commands::{
    auth::AuthCommand, completions::CompletionsCommand, config::ConfigCommand, open::OpenCommand,
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "navshell", version, about = "Fragment-navigating page shell")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Authentication gate commands
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Open a page through the fragment navigator
    Open(OpenCommand),
    /// View and manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let config_path = cli.config.clone();

    match cli.command {
        Commands::Auth(cmd) => cmd.execute(format, config_path.as_deref()).await,
        Commands::Open(cmd) => cmd.execute(format, config_path.as_deref()).await,
        Commands::Config(cmd) => cmd.execute(format, config_path.as_deref()).await,
        Commands::Completions(cmd) => cmd.execute(),
    }
}
