//! Plan command implementation

use colored::Colorize;
use plugsync_core::{Action, PlanSummary, Project};

use crate::error::Result;

/// Run the plan command
pub async fn run_plan(project: &Project, json: bool) -> Result<()> {
    project.require_project_exists()?;
    let actions = project.plan_patch_actions().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&actions)?);
    } else {
        print_plan(&actions);
    }

    Ok(())
}

fn print_plan(actions: &[Action]) {
    if actions.is_empty() {
        println!("{}", "Nothing to patch.".dimmed());
        return;
    }

    for action in actions {
        match action {
            Action::Patch { key, from, to, .. } => {
                println!("{}  {} ({} => {})", "Patch".green().bold(), key, from, to)
            }
            Action::Skip { name, key } => println!(
                "{}   {} {}",
                "Skip".yellow(),
                key,
                format!("(not installed, from {name})").dimmed()
            ),
        }
    }

    let summary = PlanSummary::of(actions);
    println!();
    println!(
        "{} {} to patch, {} skipped.",
        "Plan:".dimmed(),
        summary.patches,
        summary.skips
    );
    if summary.patches > 0 {
        println!("Run {} to apply.", "plugsync patch --apply".cyan());
    }
}
