//! Tool configuration
//!
//! The only setting is where the engine project lives relative to the root
//! folder. It is passed explicitly into [`crate::PathResolver::new`].

use plugsync_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;

/// File looked up in the root folder when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = "plugsync.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path segments from the root folder to the game project folder.
    #[serde(alias = "root")]
    pub game_root: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_root: vec!["..".into(), "..".into(), "Game".into()],
        }
    }
}

impl Config {
    /// Load from a `.toml`, `.json` or `.yaml` file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Pick the effective config: `explicit` if given, else
    /// `<root>/plugsync.toml` if present, else the defaults.
    pub fn discover(root: &NormalizedPath, explicit: Option<&NormalizedPath>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(%path, "Loading explicit config");
            return Self::load(path);
        }

        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate, "Loading config from root folder");
            return Self::load(&candidate);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}
