//! Filesystem primitives for plugsync
//!
//! Provides forward-slash normalized paths, the recursive directory copy used
//! when patching a module back into its local package, backup-by-rename, and
//! format-agnostic config file loading.
//!
//! Nothing in this crate locks or coordinates with other processes. Running two
//! copies against the same destination at once is the operator's problem.

pub mod backup;
pub mod config;
pub mod copy;
pub mod error;
pub mod path;

pub use backup::{BACKUP_MARKER, backup_path_for, backup_in_place};
pub use config::ConfigStore;
pub use copy::{CopyStats, copy_dir_recursive, ensure_copy_source};
pub use error::{Error, Result};
pub use path::NormalizedPath;
