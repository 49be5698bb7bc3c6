//! Patch command implementation
//!
//! Plans, then applies every action in order. Dry run unless `apply` is set.

use colored::Colorize;
use plugsync_core::{Project, Reporter, RunSummary, SyncEvent, SyncMode};

use crate::error::Result;

/// Prints sync events as they arrive.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Render one event as a status line.
    pub fn format_event(event: &SyncEvent) -> String {
        match event {
            SyncEvent::Patching {
                key,
                from,
                to,
                mode,
            } => {
                let prefix = if mode.is_dry_run() {
                    format!("{} ", "[dry-run]".dimmed())
                } else {
                    String::new()
                };
                format!("{prefix}: {}: {key} ({from} => {to})", "Patch".green().bold())
            }
            SyncEvent::Skipping { key } => {
                format!(": {}: {key} (not installed)", "Skip".yellow())
            }
            SyncEvent::BackupCreated { path } => {
                format!(":: {} {path}", "created backup:".dimmed())
            }
            SyncEvent::Copied { from, to, stats } => format!(
                ":: cp -r {from} {to} {}",
                format!("({} files, {} bytes)", stats.files, stats.bytes).dimmed()
            ),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: &SyncEvent) {
        println!("{}", Self::format_event(event));
    }
}

/// Run the patch command
pub async fn run_patch(project: &Project, apply: bool) -> Result<RunSummary> {
    project.require_project_exists()?;
    let actions = project.plan_patch_actions().await?;
    let mode = SyncMode::from_apply(apply);
    tracing::debug!(actions = actions.len(), %mode, "Running patch");

    let summary = project.apply_all(&actions, mode, &mut ConsoleReporter)?;
    print_summary(&summary, mode);
    Ok(summary)
}

fn print_summary(summary: &RunSummary, mode: SyncMode) {
    println!();
    match mode {
        SyncMode::DryRun => {
            println!(
                "{} {} would be patched, {} skipped.",
                "Dry run:".yellow().bold(),
                summary.previewed,
                summary.skipped
            );
            if summary.previewed > 0 {
                println!("Run {} to apply.", "plugsync patch --apply".cyan());
            }
        }
        SyncMode::Apply => println!(
            "{} {} patched, {} skipped, {} backups created.",
            "Done:".green().bold(),
            summary.patched,
            summary.skipped,
            summary.backups.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugsync_core::{Config, PathResolver, PluginKey};
    use plugsync_fs::NormalizedPath;
    use plugsync_test_utils::{TestWorkspace, tree_snapshot};

    fn project(ws: &TestWorkspace) -> Project {
        Project::new(PathResolver::new(ws.root_folder(), &Config::default()).unwrap())
    }

    #[test]
    fn test_format_skip_event() {
        colored::control::set_override(false);
        let line = ConsoleReporter::format_event(&SyncEvent::Skipping {
            key: PluginKey::new("PluginA", "ModuleA"),
        });
        assert_eq!(line, ": Skip: PluginA.ModuleA (not installed)");
    }

    #[test]
    fn test_format_patch_event() {
        colored::control::set_override(false);
        let event = SyncEvent::Patching {
            key: PluginKey::new("PluginA", "ModuleA"),
            from: NormalizedPath::new("/game/Plugins/ModuleA/Source/PluginA"),
            to: NormalizedPath::new("/ws/unreal-m-foo/src/PluginA/Source/ModuleA"),
            mode: SyncMode::Apply,
        };
        assert_eq!(
            ConsoleReporter::format_event(&event),
            ": Patch: PluginA.ModuleA (/game/Plugins/ModuleA/Source/PluginA => /ws/unreal-m-foo/src/PluginA/Source/ModuleA)"
        );
    }

    #[tokio::test]
    async fn test_patch_dry_run_changes_nothing() {
        let ws = TestWorkspace::new();
        ws.local_module("unreal-m-foo", "PluginA", "ModuleA");
        ws.installed_module("PluginA", "ModuleA");
        let before = tree_snapshot(ws.base());

        let summary = run_patch(&project(&ws), false).await.unwrap();

        assert_eq!(summary.previewed, 1);
        assert_eq!(summary.patched, 0);
        assert_eq!(tree_snapshot(ws.base()), before);
    }

    #[tokio::test]
    async fn test_patch_apply_backs_up_and_copies() {
        let ws = TestWorkspace::new();
        let local = ws.local_module("unreal-m-foo", "PluginA", "ModuleA");
        let installed = ws.installed_module("PluginA", "ModuleA");
        ws.local_module("unreal-m-foo", "PluginB", "ModuleB");

        let summary = run_patch(&project(&ws), true).await.unwrap();

        assert_eq!((summary.patched, summary.skipped), (1, 1));
        assert_eq!(summary.backups.len(), 1);
        assert!(summary.backups[0].is_dir());
        assert_eq!(tree_snapshot(&local), tree_snapshot(&installed));
    }
}
