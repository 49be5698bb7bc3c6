//! Project context from command-line options
//!
//! The anchor folder is `--root` (or `PLUGSYNC_ROOT`), falling back to the
//! folder holding the executable, which is where the tool is installed inside
//! the root package.

use std::path::{Path, PathBuf};

use plugsync_core::{Config, PathResolver, Project};
use plugsync_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Pick the folder path resolution starts from.
pub fn resolve_anchor(root: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = root {
        return Ok(root.to_path_buf());
    }

    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| CliError::user(format!("Cannot determine folder of {}", exe.display())))
}

/// Load config and build the project for the given options.
pub fn open_project(root: Option<&Path>, config: Option<&Path>) -> Result<Project> {
    let anchor = resolve_anchor(root)?;
    let explicit = config.map(NormalizedPath::new);
    let config = Config::discover(&NormalizedPath::new(&anchor), explicit.as_ref())?;
    tracing::debug!(anchor = %anchor.display(), game_root = ?config.game_root, "Resolving project");

    let resolver = PathResolver::new(&anchor, &config)?;
    Ok(Project::new(resolver))
}
