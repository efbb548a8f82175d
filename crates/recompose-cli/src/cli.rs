//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recompose_reconcile::DEFAULT_VENDOR;

/// recompose - Reconcile a legacy extension tree against a package manifest
#[derive(Parser, Debug)]
#[command(name = "recompose")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List discovered extensions, grouped by project
    Scan {
        /// Root directory to scan
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Classify discovered extensions against the manifest
    ///
    /// Runs one reconciliation pass and reports which extensions are already
    /// specified, which still need a requirement, and which cannot be mapped
    /// to a package automatically. Never modifies the manifest.
    Status {
        /// Root directory to scan
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Manifest file (defaults to composer.json under the root)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Key missing requirements by project instead of extension name
        #[arg(long)]
        prefer_projects: bool,

        /// Vendor namespace for managed packages
        #[arg(long, default_value = DEFAULT_VENDOR)]
        vendor: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
