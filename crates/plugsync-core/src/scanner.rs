//! Discovery of local work-in-progress packages
//!
//! A package is any folder in the root or workspace folder whose name starts
//! with `unreal-m-`, apart from the reserved `unreal-m-packages` cache. Inside
//! it, every `src/<plugin>/Source/<module>` directory becomes one
//! [`SourceFolder`].

use std::collections::HashSet;
use std::ffi::OsStr;
use std::io;
use std::sync::LazyLock;

use plugsync_fs::NormalizedPath;
use regex::Regex;

use crate::model::{Package, PluginKey, SourceFolder};
use crate::{Error, PathResolver, Result};

/// Folder holding installed packages rather than work in progress.
pub const RESERVED_PACKAGE_NAME: &str = "unreal-m-packages";

/// Package folder naming convention.
pub static PACKAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^unreal-m-").unwrap());

/// Backups left next to a module by earlier patches.
static BACKUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.backup\.\d+$").unwrap());

const PACKAGE_SRC_DIR: &str = "src";
const PLUGIN_SOURCE_DIR: &str = "Source";

/// True if a folder with this base name should be scanned as a package.
pub fn is_package_folder_name(name: &str) -> bool {
    name != RESERVED_PACKAGE_NAME && PACKAGE_PATTERN.is_match(name)
}

/// Lists packages below a set of search folders.
#[derive(Debug, Clone)]
pub struct PackageScanner {
    search_folders: Vec<NormalizedPath>,
}

impl PackageScanner {
    /// Search the resolver's root folder, then its workspace folder.
    pub fn new(resolver: &PathResolver) -> Self {
        Self::with_search_folders(vec![
            resolver.root_folder().clone(),
            resolver.workspace_folder().clone(),
        ])
    }

    pub fn with_search_folders(search_folders: Vec<NormalizedPath>) -> Self {
        Self { search_folders }
    }

    /// Find every package, in discovery order.
    ///
    /// Installed paths are left unset; see [`crate::InstalledMatcher`].
    pub async fn find_local_packages(&self) -> Result<Vec<Package>> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for folder in &self.search_folders {
            for entry in list_directories(folder).await? {
                let matches = entry.file_name().is_some_and(is_package_folder_name);
                if matches && seen.insert(entry.clone()) {
                    candidates.push(entry);
                }
            }
        }

        let mut packages = Vec::with_capacity(candidates.len());
        for folder in candidates {
            packages.push(load_package(folder).await?);
        }
        Ok(packages)
    }
}

/// Read one package folder. Module listings of its plugins run concurrently
/// and are joined back in plugin order.
async fn load_package(folder: NormalizedPath) -> Result<Package> {
    let name = folder.file_name().unwrap_or_default().to_string();
    let plugins = list_directories_if_present(&folder.join(PACKAGE_SRC_DIR)).await?;

    let handles: Vec<_> = plugins
        .into_iter()
        .map(|plugin| tokio::spawn(load_plugin_modules(plugin)))
        .collect();

    let mut source_folders = Vec::new();
    for handle in handles {
        let modules = handle.await.map_err(|e| Error::ScanTask {
            message: e.to_string(),
        })??;
        source_folders.extend(modules);
    }

    tracing::debug!(package = %name, modules = source_folders.len(), "Loaded package");

    Ok(Package {
        name,
        root_path: folder,
        source_folders,
    })
}

async fn load_plugin_modules(plugin: NormalizedPath) -> Result<Vec<SourceFolder>> {
    let plugin_name = plugin.file_name().unwrap_or_default().to_string();
    let modules = list_directories_if_present(&plugin.join(PLUGIN_SOURCE_DIR)).await?;

    Ok(modules
        .into_iter()
        .filter_map(|module| {
            let module_name = module.file_name()?;
            if BACKUP_PATTERN.is_match(module_name) {
                return None;
            }
            let key = PluginKey::new(&plugin_name, module_name);
            Some(SourceFolder::new(key, module))
        })
        .collect())
}

/// Like [`list_directories`], but a missing folder yields nothing.
async fn list_directories_if_present(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    match list_directories(dir).await {
        Err(Error::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %dir, "Expected folder is missing, treating as empty");
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Directories directly inside `dir`, sorted by name. Symlinks are followed;
/// files and dangling links are ignored.
async fn list_directories(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native = dir.to_native();
    let mut reader = tokio::fs::read_dir(&native)
        .await
        .map_err(|e| Error::io(&native, e))?;

    let mut found = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(|e| Error::io(&native, e))? {
        let path = entry.path();
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => match segment_name(&entry.file_name()) {
                Some(name) => found.push(dir.join(name)),
                None => tracing::warn!(
                    path = %path.display(),
                    "Skipping folder whose name is not a plain UTF-8 path segment"
                ),
            },
            Ok(_) => {}
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable entry"),
        }
    }

    found.sort();
    tracing::debug!(path = %dir, entries = found.len(), "Listed directory");
    Ok(found)
}

/// `name` as a single path segment, if it survives normalization unchanged.
fn segment_name(name: &OsStr) -> Option<&str> {
    let name = name.to_str()?;
    (!name.contains(['/', '\\'])).then_some(name)
}
