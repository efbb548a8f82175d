//! Status command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;
use recompose_extensions::Catalog;
use recompose_reconcile::{ReconcileOptions, RequirementSet, reconcile};

use crate::error::Result;

const DEFAULT_MANIFEST: &str = "composer.json";

/// Run the status command
pub fn run_status(
    root: &Path,
    manifest: Option<&Path>,
    prefer_projects: bool,
    vendor: &str,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::build(root)?;

    // An explicitly named manifest must exist; the default location is
    // allowed to be absent and reads as "no requirements yet".
    let requirements = match manifest {
        Some(path) => RequirementSet::from_json_file(path)?,
        None => {
            let default_path: PathBuf = root.join(DEFAULT_MANIFEST);
            if default_path.exists() {
                RequirementSet::from_json_file(&default_path)?
            } else {
                RequirementSet::default()
            }
        }
    };

    let options = ReconcileOptions::with_vendor(vendor).prefer_projects(prefer_projects);
    let result = reconcile(&catalog, &requirements, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", "Reconciliation Status".bold());
    println!();
    println!("{}:       {}", "Root".dimmed(), root.display());
    println!("{}: {}", "Extensions".dimmed(), catalog.len());
    println!();

    println!("{}:", "Specified".bold());
    if result.specified.is_empty() {
        println!("  {}", "None".dimmed());
    } else {
        for (package, constraint) in &result.specified {
            println!("  {} {} ({})", "+".green(), package.cyan(), constraint);
        }
    }
    println!();

    println!("{}:", "Unreconciled".bold());
    if result.unreconciled.is_empty() {
        println!("  {}", "None".dimmed());
    } else {
        for (name, package) in &result.unreconciled {
            println!("  {} {} needs {}", "-".red(), name, package.cyan());
        }
    }
    println!();

    println!("{}:", "Exotic".bold());
    if result.exotic.is_empty() {
        println!("  {}", "None".dimmed());
    } else {
        for (machine_name, human_name) in &result.exotic {
            println!("  {} {} ({})", "?".yellow(), machine_name, human_name.dimmed());
        }
        println!(
            "  {}",
            "These extensions have no project and will require manual updating.".dimmed()
        );
    }

    let invalid = requirements.invalid_constraints();
    if !invalid.is_empty() {
        println!();
        println!("{}:", "Warnings".yellow().bold());
        for (package, constraint) in invalid {
            println!(
                "  {} {} has a constraint that is not a semver range: {}",
                "!".yellow(),
                package,
                constraint
            );
        }
    }

    if result.is_settled() {
        println!();
        println!("{}", "Everything on disk is reflected in the manifest.".green());
    }

    Ok(())
}
