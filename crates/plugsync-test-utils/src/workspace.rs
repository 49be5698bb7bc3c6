//! [`TestWorkspace`] builder for plugsync scenarios.
//!
//! Lays out the folders the tool expects with its default config:
//!
//! ```text
//! <base>/Game/Plugins/<module>/Source/<plugin>/...           installed copies
//! <base>/packages/                                          workspace folder
//! <base>/packages/unreal-m-packages/                        root folder
//! <base>/packages/<package>/src/<plugin>/Source/<module>/   local copies
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary package/game layout with helpers for populating it.
///
/// # Example
///
/// ```rust,no_run
/// use plugsync_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.local_module("unreal-m-foo", "PluginA", "ModuleA");
/// ws.installed_module("PluginA", "ModuleA");
/// ```
pub struct TestWorkspace {
    /// Removed on drop.
    _temp_dir: TempDir,
    base: PathBuf,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create the root folder and an empty `Game/Plugins`.
    pub fn new() -> Self {
        let ws = Self::without_game();
        fs::create_dir_all(ws.plugins_folder()).unwrap();
        ws
    }

    /// Create the root folder only; the game folder is missing.
    pub fn without_game() -> Self {
        let temp_dir = TempDir::new().unwrap();
        // Canonical so paths compare equal to what the resolver produces
        let base = dunce::canonicalize(temp_dir.path()).unwrap();
        let ws = Self {
            _temp_dir: temp_dir,
            base,
        };
        fs::create_dir_all(ws.root_folder()).unwrap();
        ws
    }

    /// The temporary directory everything lives in.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `packages/unreal-m-packages`, the anchor the tool runs from.
    pub fn root_folder(&self) -> PathBuf {
        self.workspace_folder().join("unreal-m-packages")
    }

    pub fn workspace_folder(&self) -> PathBuf {
        self.base().join("packages")
    }

    pub fn game_folder(&self) -> PathBuf {
        self.base().join("Game")
    }

    pub fn plugins_folder(&self) -> PathBuf {
        self.game_folder().join("Plugins")
    }

    /// Create `<workspace>/<package>/src/<plugin>/Source/<module>` with a
    /// build file in it, and return the module path.
    pub fn local_module(&self, package: &str, plugin: &str, module: &str) -> PathBuf {
        self.module_under(&self.workspace_folder(), package, plugin, module)
    }

    /// Like [`Self::local_module`], but inside the root folder.
    pub fn local_module_in_root(&self, package: &str, plugin: &str, module: &str) -> PathBuf {
        self.module_under(&self.root_folder(), package, plugin, module)
    }

    /// Create `Game/Plugins/<module>/Source/<plugin>` with a build file and a
    /// nested source file, and return its path.
    pub fn installed_module(&self, plugin: &str, module: &str) -> PathBuf {
        let path = self
            .plugins_folder()
            .join(module)
            .join("Source")
            .join(plugin);
        self.write_file(
            &path.join(format!("{module}.Build.cs")),
            &format!("// installed build rules for {plugin}.{module}\n"),
        );
        self.write_file(
            &path.join("Private").join(format!("{module}.cpp")),
            "// edited in the engine project\n",
        );
        path
    }

    /// Write `content` to `path`, creating parent directories.
    pub fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content)
            .unwrap_or_else(|e| panic!("TestWorkspace: failed to write {}: {e}", path.display()));
    }

    fn module_under(&self, parent: &Path, package: &str, plugin: &str, module: &str) -> PathBuf {
        let path = parent
            .join(package)
            .join("src")
            .join(plugin)
            .join("Source")
            .join(module);
        self.write_file(
            &path.join(format!("{module}.Build.cs")),
            &format!("// local build rules for {plugin}.{module}\n"),
        );
        path
    }
}
