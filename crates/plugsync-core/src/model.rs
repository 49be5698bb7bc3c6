//! Packages, source folders and the actions planned for them

use std::fmt;

use plugsync_fs::NormalizedPath;
use serde::Serialize;

/// Identity of one module within the engine's plugin namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PluginKey {
    pub plugin: String,
    pub module: String,
}

impl PluginKey {
    pub fn new(plugin: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            module: module.into(),
        }
    }

    /// Relative location of this module below `<game>/Plugins`.
    ///
    /// The engine's plugin installer lays modules out module-first:
    /// `<module>/Source/<plugin>`.
    pub fn installed_segments(&self) -> [&str; 3] {
        [self.module.as_str(), "Source", self.plugin.as_str()]
    }
}

impl fmt::Display for PluginKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.plugin, self.module)
    }
}

/// One module's source directory inside a local package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFolder {
    #[serde(flatten)]
    pub key: PluginKey,
    /// `<package>/src/<plugin>/Source/<module>`
    pub local_path: NormalizedPath,
    /// Set when the installed copy existed at scan time. Never re-checked.
    pub installed_path: Option<NormalizedPath>,
}

impl SourceFolder {
    pub fn new(key: PluginKey, local_path: NormalizedPath) -> Self {
        Self {
            key,
            local_path,
            installed_path: None,
        }
    }
}

/// A local work-in-progress folder holding one or more plugins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    pub root_path: NormalizedPath,
    pub source_folders: Vec<SourceFolder>,
}

/// What the synchronizer should do with one source folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action")]
pub enum Action {
    /// Copy the installed folder `from` over the local folder `to`.
    Patch {
        name: String,
        key: PluginKey,
        from: NormalizedPath,
        to: NormalizedPath,
    },
    /// Nothing installed to pull back.
    Skip { name: String, key: PluginKey },
}

impl Action {
    /// Build the action for `folder`, owned by the package called `package`.
    pub fn for_folder(package: &str, folder: &SourceFolder) -> Self {
        match &folder.installed_path {
            Some(installed) => Self::Patch {
                name: package.to_string(),
                key: folder.key.clone(),
                from: installed.clone(),
                to: folder.local_path.clone(),
            },
            None => Self::Skip {
                name: package.to_string(),
                key: folder.key.clone(),
            },
        }
    }

    /// Name of the owning package.
    pub fn name(&self) -> &str {
        match self {
            Self::Patch { name, .. } | Self::Skip { name, .. } => name,
        }
    }

    pub fn key(&self) -> &PluginKey {
        match self {
            Self::Patch { key, .. } | Self::Skip { key, .. } => key,
        }
    }

    pub fn is_patch(&self) -> bool {
        matches!(self, Self::Patch { .. })
    }
}
