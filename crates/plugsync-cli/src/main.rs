//! plugsync CLI
//!
//! Copies edits made to installed engine plugins back into the local packages
//! they were installed from.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let project = context::open_project(cli.root.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Commands::Check => commands::run_check(&project),
        Commands::List { json } => commands::run_list(&project, json).await,
        Commands::Plan { json } => commands::run_plan(&project, json).await,
        Commands::Patch { apply } => commands::run_patch(&project, apply).await.map(|_| ()),
    }
}
