//! Shared test utilities for the plugsync workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`workspace`]: [`TestWorkspace`] builder for the package/game folder layout
//! - [`tree`]: content snapshots for byte-identical tree assertions

pub mod tree;
pub mod workspace;

pub use tree::{TreeEntry, tree_snapshot};
pub use workspace::TestWorkspace;
