//! recompose CLI
//!
//! Read-only reporting over the reconciliation engine: scan a legacy
//! extension tree and classify it against a package manifest.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Scan { root }) => commands::run_scan(&root),
        Some(Commands::Status {
            root,
            manifest,
            prefer_projects,
            vendor,
            json,
        }) => commands::run_status(&root, manifest.as_deref(), prefer_projects, &vendor, json),
        None => {
            // No command provided - show help hint
            println!("{} extension reconciliation", "recompose".green().bold());
            println!();
            println!("Run {} for available commands.", "recompose --help".cyan());
            Ok(())
        }
    }
}
