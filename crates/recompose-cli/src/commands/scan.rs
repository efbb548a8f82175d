//! Scan command implementation

use std::path::Path;

use colored::Colorize;
use recompose_extensions::Catalog;

use crate::error::Result;

/// Run the scan command
pub fn run_scan(root: &Path) -> Result<()> {
    let catalog = Catalog::build(root)?;

    println!("{}", "Discovered Extensions".bold());
    println!();
    println!("{}:   {}", "Root".dimmed(), root.display());
    println!("{}:  {}", "Found".dimmed(), catalog.len());
    println!();

    if catalog.is_empty() {
        println!("  {}", "No extensions discovered.".dimmed());
        return Ok(());
    }

    for project in catalog.project_names() {
        println!("{}:", project.cyan().bold());
        for record in catalog.extensions_for_project(project) {
            let version = record
                .semantic_version
                .as_deref()
                .or(record.raw_version.as_deref())
                .unwrap_or("no version");
            println!(
                "  {} {} ({})",
                "+".green(),
                record.machine_name,
                version.dimmed()
            );
        }
    }

    let exotic = catalog.exotic_extensions();
    if !exotic.is_empty() {
        println!();
        println!("{}:", "No project".yellow().bold());
        for record in exotic {
            println!(
                "  {} {} ({})",
                "?".yellow(),
                record.machine_name,
                record.human_name.dimmed()
            );
        }
    }

    Ok(())
}
