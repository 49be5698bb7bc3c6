//! Scenario tests
//!
//! Multi-step runs against one workspace: repeated patches, drift between
//! planning and applying, and unusual game folder locations.

use std::sync::atomic::{AtomicI64, Ordering};

use plugsync_core::{
    Action, Config, ErrorKind, PathResolver, Project, RunSummary, SyncEvent, SyncMode,
    Synchronizer,
};
use plugsync_fs::NormalizedPath;
use plugsync_test_utils::{TestWorkspace, tree_snapshot};
use pretty_assertions::assert_eq;
use std::fs;

static CLOCK: AtomicI64 = AtomicI64::new(1_000);

/// Strictly increasing clock so repeated runs get distinct backup names.
fn ticking_clock() -> i64 {
    CLOCK.fetch_add(1, Ordering::SeqCst)
}

fn project(ws: &TestWorkspace, config: &Config) -> Project {
    let resolver = PathResolver::new(ws.root_folder(), config).unwrap();
    Project::with_synchronizer(resolver, Synchronizer::with_clock(ticking_clock))
}

async fn apply(project: &Project) -> RunSummary {
    let actions = project.plan_patch_actions().await.unwrap();
    let mut events: Vec<SyncEvent> = Vec::new();
    project.apply_all(&actions, SyncMode::Apply, &mut events).unwrap()
}

fn backups_next_to(path: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.contains(".backup."))
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_repeated_apply_keeps_every_backup() {
    let ws = TestWorkspace::new();
    let local = ws.local_module("unreal-m-foo", "PluginA", "ModuleA");
    let installed = ws.installed_module("PluginA", "ModuleA");
    let project = project(&ws, &Config::default());

    let first = apply(&project).await;
    ws.write_file(&installed.join("Private").join("Later.cpp"), "// second edit\n");
    let second = apply(&project).await;

    assert_eq!((first.patched, second.patched), (1, 1));
    assert_eq!(backups_next_to(&local).len(), 2);
    assert_eq!(tree_snapshot(&local), tree_snapshot(&installed));

    // Backups never turn into modules of their own
    let packages = project.list_local_packages().await.unwrap();
    assert_eq!(packages[0].source_folders.len(), 1);
}

#[tokio::test]
async fn test_installed_copy_removed_after_planning() {
    let ws = TestWorkspace::new();
    let local_a = ws.local_module("unreal-m-foo", "PluginA", "ModuleA");
    let local_b = ws.local_module("unreal-m-foo", "PluginB", "ModuleB");
    let installed_a = ws.installed_module("PluginA", "ModuleA");
    ws.installed_module("PluginB", "ModuleB");
    let project = project(&ws, &Config::default());

    let actions = project.plan_patch_actions().await.unwrap();
    assert!(actions.iter().all(Action::is_patch));
    fs::remove_dir_all(&installed_a).unwrap();
    let local_a_before = tree_snapshot(&local_a);
    let local_b_before = tree_snapshot(&local_b);

    let mut events: Vec<SyncEvent> = Vec::new();
    let err = project
        .apply_all(&actions, SyncMode::Apply, &mut events)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    // The failing action touched nothing and later actions never ran
    assert_eq!(tree_snapshot(&local_a), local_a_before);
    assert!(backups_next_to(&local_a).is_empty());
    assert_eq!(tree_snapshot(&local_b), local_b_before);
    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn test_absolute_game_root() {
    let ws = TestWorkspace::without_game();
    let elsewhere = tempfile::TempDir::new().unwrap();
    let game = NormalizedPath::canonicalize(elsewhere.path()).unwrap();
    let installed = game.join("Plugins/ModuleA/Source/PluginA");
    fs::create_dir_all(installed.to_native()).unwrap();
    ws.local_module("unreal-m-foo", "PluginA", "ModuleA");

    let config = Config {
        game_root: vec![game.as_str().to_string()],
    };
    let project = project(&ws, &config);
    project.require_project_exists().unwrap();

    let actions = project.plan_patch_actions().await.unwrap();
    assert_eq!(actions.len(), 1);
    let Action::Patch { from, .. } = &actions[0] else {
        panic!("expected a patch");
    };
    assert_eq!(from, &installed);
}

#[tokio::test]
async fn test_plugin_first_layout_is_not_matched() {
    let ws = TestWorkspace::new();
    ws.local_module("unreal-m-foo", "PluginA", "ModuleA");
    // Installed the other way round: Plugins/<plugin>/Source/<module>
    ws.write_file(
        &ws.plugins_folder()
            .join("PluginA")
            .join("Source")
            .join("ModuleA")
            .join("ModuleA.Build.cs"),
        "// wrong layout\n",
    );

    let actions = project(&ws, &Config::default())
        .plan_patch_actions()
        .await
        .unwrap();

    assert_eq!(actions.len(), 1);
    assert!(!actions[0].is_patch());
}
