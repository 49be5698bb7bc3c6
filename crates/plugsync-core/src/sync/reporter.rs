//! Status side channel for the synchronizer

use plugsync_fs::{CopyStats, NormalizedPath};
use serde::Serialize;

use super::SyncMode;
use crate::model::PluginKey;

/// A status update emitted while applying an action.
///
/// `Patching` and `Skipping` are always emitted before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SyncEvent {
    Patching {
        key: PluginKey,
        from: NormalizedPath,
        to: NormalizedPath,
        mode: SyncMode,
    },
    Skipping {
        key: PluginKey,
    },
    BackupCreated {
        path: NormalizedPath,
    },
    Copied {
        from: NormalizedPath,
        to: NormalizedPath,
        stats: CopyStats,
    },
}

/// Receives [`SyncEvent`]s as they happen.
pub trait Reporter {
    fn report(&mut self, event: &SyncEvent);
}

/// Collects events, mostly for tests and JSON output.
impl Reporter for Vec<SyncEvent> {
    fn report(&mut self, event: &SyncEvent) {
        self.push(event.clone());
    }
}
