//! End-to-end integration test for the whole pipeline
//!
//! Exercises the complete flow: config discovery -> folder resolution ->
//! package scan -> installed match -> plan -> dry run -> apply.

use plugsync_core::{
    Action, ActionOutcome, Config, PathResolver, PlanSummary, PluginKey, Project, SyncEvent,
    SyncMode, Synchronizer,
};
use plugsync_fs::NormalizedPath;
use plugsync_test_utils::{TestWorkspace, tree_snapshot};
use pretty_assertions::assert_eq;
use std::fs;

const FIXED_MILLIS: i64 = 1_700_000_000_000;

/// A project whose game lives in `Engine/Game`, configured via `plugsync.toml`.
fn setup_configured_workspace() -> TestWorkspace {
    let ws = TestWorkspace::without_game();
    ws.write_file(
        &ws.root_folder().join("plugsync.toml"),
        "game_root = [\"..\", \"..\", \"Engine\", \"Game\"]\n",
    );

    let plugins = ws.base().join("Engine").join("Game").join("Plugins");
    // Installed copy of Tools.Editor, with an extra file edited in the engine
    let installed = plugins.join("Editor").join("Source").join("Tools");
    ws.write_file(&installed.join("Editor.Build.cs"), "// engine edit\n");
    ws.write_file(&installed.join("Public").join("Editor.h"), "#pragma once\n");
    fs::create_dir_all(installed.join("Resources")).unwrap();

    ws.local_module("unreal-m-tools", "Tools", "Editor");
    ws.local_module("unreal-m-tools", "Tools", "Runtime");
    ws.local_module_in_root("unreal-m-core", "Core", "Math");
    ws
}

#[tokio::test]
async fn test_full_pipeline_with_config_file() {
    let ws = setup_configured_workspace();
    let root = NormalizedPath::new(ws.root_folder());

    // 1. Config discovery picks up plugsync.toml
    let config = Config::discover(&root, None).unwrap();
    assert_eq!(config.game_root, vec!["..", "..", "Engine", "Game"]);

    // 2. Resolution
    let resolver = PathResolver::new(ws.root_folder(), &config).unwrap();
    assert_eq!(
        resolver.plugins_folder(),
        NormalizedPath::new(ws.base().join("Engine/Game/Plugins"))
    );
    let project = Project::with_synchronizer(resolver, Synchronizer::with_clock(|| FIXED_MILLIS));
    project.require_project_exists().unwrap();

    // 3. Scan and match
    let packages = project.list_local_packages().await.unwrap();
    let names: Vec<_> = packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["unreal-m-core", "unreal-m-tools"]);
    for folder in packages.iter().flat_map(|p| &p.source_folders) {
        assert!(folder.local_path.is_dir());
        assert_eq!(
            folder.installed_path.is_some(),
            folder.key == PluginKey::new("Tools", "Editor")
        );
    }

    // 4. Plan
    let actions = project.plan_patch_actions().await.unwrap();
    assert_eq!(PlanSummary::of(&actions), PlanSummary { patches: 1, skips: 2 });
    assert!(actions[0].is_patch());
    assert_eq!(actions[0].name(), "unreal-m-tools");
    let keys: Vec<String> = actions.iter().map(|a| a.key().to_string()).collect();
    assert_eq!(keys, vec!["Tools.Editor", "Core.Math", "Tools.Runtime"]);

    // 5. Dry run leaves everything alone
    let before = tree_snapshot(ws.base());
    let mut events: Vec<SyncEvent> = Vec::new();
    let preview = project.apply_all(&actions, SyncMode::DryRun, &mut events).unwrap();
    assert_eq!(preview.previewed, 1);
    assert_eq!(tree_snapshot(ws.base()), before);

    // 6. Apply
    let Action::Patch { from, to, .. } = &actions[0] else {
        panic!("expected a patch first");
    };
    let local_before = tree_snapshot(to.to_native().as_path());
    let mut events: Vec<SyncEvent> = Vec::new();
    let summary = project.apply_all(&actions, SyncMode::Apply, &mut events).unwrap();

    assert_eq!((summary.patched, summary.skipped), (1, 2));
    let backup = to.with_suffix(&format!(".backup.{FIXED_MILLIS}"));
    assert_eq!(summary.backups, vec![backup.clone()]);
    assert_eq!(tree_snapshot(backup.to_native().as_path()), local_before);
    assert_eq!(
        tree_snapshot(to.to_native().as_path()),
        tree_snapshot(from.to_native().as_path())
    );
    assert!(to.join("Resources").is_dir(), "empty directories are copied");
}

#[tokio::test]
async fn test_events_serialize_for_scripting() {
    let ws = setup_configured_workspace();
    let config = Config::discover(&NormalizedPath::new(ws.root_folder()), None).unwrap();
    let project = Project::with_synchronizer(
        PathResolver::new(ws.root_folder(), &config).unwrap(),
        Synchronizer::with_clock(|| FIXED_MILLIS),
    );

    let actions = project.plan_patch_actions().await.unwrap();
    let mut events: Vec<SyncEvent> = Vec::new();
    let outcome = project
        .apply_action(&actions[0], SyncMode::Apply, &mut events)
        .unwrap();
    assert!(matches!(outcome, ActionOutcome::Patched { .. }));

    let json = serde_json::to_value(&events).unwrap();
    let kinds: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["patching", "backup_created", "copied"]);
    assert_eq!(json[0]["mode"], "apply");
    assert_eq!(json[2]["stats"]["files"], 2);
}
