//! Matching local source folders against the engine project's installed copies

use plugsync_fs::NormalizedPath;

use crate::PathResolver;
use crate::model::{Package, PluginKey};

/// Looks in `<game>/Plugins` for the installed copy of each module.
#[derive(Debug, Clone)]
pub struct InstalledMatcher {
    plugins_folder: NormalizedPath,
}

impl InstalledMatcher {
    pub fn new(resolver: &PathResolver) -> Self {
        Self::with_plugins_folder(resolver.plugins_folder())
    }

    pub fn with_plugins_folder(plugins_folder: NormalizedPath) -> Self {
        Self { plugins_folder }
    }

    /// Where the engine installs the module identified by `key`.
    pub fn expected_installed_path(&self, key: &PluginKey) -> NormalizedPath {
        self.plugins_folder.join_all(&key.installed_segments())
    }

    /// Record, on every folder of `package`, whether its installed copy exists
    /// right now. Read-only on disk.
    pub fn match_package(&self, package: &mut Package) {
        for folder in &mut package.source_folders {
            let expected = self.expected_installed_path(&folder.key);
            let found = expected.exists();
            tracing::debug!(key = %folder.key, path = %expected, found, "Checked installed path");
            folder.installed_path = found.then_some(expected);
        }
    }
}
