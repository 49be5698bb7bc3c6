//! Core pipeline for plugsync
//!
//! Pulls edits made to installed engine plugins back into the local
//! work-in-progress packages they came from:
//!
//! ```text
//!   PathResolver ──> PackageScanner ──> InstalledMatcher ──> ActionPlanner ──> Synchronizer
//!   (folders)        (local modules)    (installed copies)   (patch / skip)    (backup + copy)
//! ```
//!
//! A patch is always a full directory overwrite of the local module, with the
//! previous local folder kept as `<folder>.backup.<epoch-millis>`. There is no
//! merging, diffing or locking; two runs against the same folders at the same
//! time are not guarded against.
//!
//! # Example
//!
//! ```no_run
//! use plugsync_core::{Config, PathResolver, Project, SyncEvent, SyncMode};
//!
//! # async fn run() -> plugsync_core::Result<()> {
//! let resolver = PathResolver::new(".", &Config::default())?;
//! let project = Project::new(resolver);
//! project.require_project_exists()?;
//!
//! let mut events: Vec<SyncEvent> = Vec::new();
//! for action in project.plan_patch_actions().await? {
//!     project.apply_action(&action, SyncMode::DryRun, &mut events)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod planner;
pub mod project;
pub mod resolver;
pub mod scanner;
pub mod sync;

pub use config::{CONFIG_FILE_NAME, Config};
pub use error::{Error, ErrorKind, Result};
pub use matcher::InstalledMatcher;
pub use model::{Action, Package, PluginKey, SourceFolder};
pub use planner::{PlanSummary, determine_patch_actions};
pub use project::Project;
pub use resolver::{PLUGINS_DIR, PathResolver};
pub use scanner::{PackageScanner, RESERVED_PACKAGE_NAME, is_package_folder_name};
pub use sync::{ActionOutcome, Reporter, RunSummary, SyncEvent, SyncMode, Synchronizer};
