//! Resolution of the root, workspace and game folders
//!
//! Expected layout with the default config:
//!
//! ```text
//! <parent>/Game                          game folder
//! <parent>/packages                      workspace folder
//! <parent>/packages/unreal-m-packages    root folder (the tool lives here)
//! <parent>/packages/unreal-m-foo         a work-in-progress package
//! ```

use std::path::Path;

use plugsync_fs::NormalizedPath;

use crate::{Config, Error, Result};

/// Directory under the game folder holding installed plugins.
pub const PLUGINS_DIR: &str = "Plugins";

#[derive(Debug, Clone)]
pub struct PathResolver {
    root_folder: NormalizedPath,
    workspace_folder: NormalizedPath,
    game_folder: NormalizedPath,
}

impl PathResolver {
    /// Resolve all folders from `anchor`, which must exist.
    pub fn new(anchor: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let root_folder = NormalizedPath::canonicalize(anchor)?;
        let workspace_folder = root_folder
            .parent()
            .unwrap_or_else(|| root_folder.clone());
        let game_folder = config
            .game_root
            .iter()
            .fold(root_folder.clone(), |acc, segment| {
                if Path::new(segment).is_absolute() {
                    NormalizedPath::new(segment)
                } else {
                    acc.join(segment)
                }
            });

        tracing::debug!(
            root = %root_folder,
            workspace = %workspace_folder,
            game = %game_folder,
            "Resolved folders"
        );

        Ok(Self {
            root_folder,
            workspace_folder,
            game_folder,
        })
    }

    pub fn root_folder(&self) -> &NormalizedPath {
        &self.root_folder
    }

    pub fn workspace_folder(&self) -> &NormalizedPath {
        &self.workspace_folder
    }

    pub fn game_folder(&self) -> &NormalizedPath {
        &self.game_folder
    }

    pub fn plugins_folder(&self) -> NormalizedPath {
        self.game_folder.join(PLUGINS_DIR)
    }

    /// Fail with [`Error::ProjectNotFound`] unless the game folder exists.
    pub fn require_project_exists(&self) -> Result<()> {
        if self.game_folder.is_dir() {
            Ok(())
        } else {
            Err(Error::ProjectNotFound {
                path: self.game_folder.to_native(),
            })
        }
    }
}
