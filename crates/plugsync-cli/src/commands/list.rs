//! List command implementation

use colored::Colorize;
use plugsync_core::{Package, Project};

use crate::error::Result;

/// Run the list command
pub async fn run_list(project: &Project, json: bool) -> Result<()> {
    project.require_project_exists()?;
    let packages = project.list_local_packages().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&packages)?);
    } else {
        print_packages(&packages);
    }

    Ok(())
}

fn print_packages(packages: &[Package]) {
    if packages.is_empty() {
        println!("{}", "No local packages found.".dimmed());
        return;
    }

    for package in packages {
        println!("{} ({})", package.name.cyan().bold(), package.root_path.as_str().dimmed());
        if package.source_folders.is_empty() {
            println!("  {}", "no modules".dimmed());
        }
        for folder in &package.source_folders {
            match &folder.installed_path {
                Some(installed) => println!(
                    "  {} {:<32} {}",
                    "+".green(),
                    folder.key.to_string(),
                    installed.as_str().dimmed()
                ),
                None => println!(
                    "  {} {:<32} {}",
                    "-".yellow(),
                    folder.key.to_string(),
                    "not installed".yellow()
                ),
            }
        }
    }

    let modules: usize = packages.iter().map(|p| p.source_folders.len()).sum();
    let installed = packages
        .iter()
        .flat_map(|p| &p.source_folders)
        .filter(|f| f.installed_path.is_some())
        .count();
    println!();
    println!(
        "{} {} packages, {} modules, {} installed.",
        "Total:".dimmed(),
        packages.len(),
        modules,
        installed
    );
}
