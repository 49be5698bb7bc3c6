//! Backup-then-copy execution of patch actions

use std::fmt;

use plugsync_fs::{CopyStats, NormalizedPath, backup_in_place, copy_dir_recursive, ensure_copy_source};
use serde::Serialize;

use super::{Reporter, SyncEvent};
use crate::Result;
use crate::model::Action;

/// Whether patches touch the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Report intended transfers, mutate nothing.
    DryRun,
    /// Back up and overwrite local folders.
    Apply,
}

impl SyncMode {
    pub fn from_apply(apply: bool) -> Self {
        if apply { Self::Apply } else { Self::DryRun }
    }

    pub fn is_dry_run(self) -> bool {
        self == Self::DryRun
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DryRun => write!(f, "dry-run"),
            Self::Apply => write!(f, "apply"),
        }
    }
}

/// What applying one action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Skipped,
    /// Dry-run patch.
    Previewed,
    Patched {
        backup: Option<NormalizedPath>,
        stats: CopyStats,
    },
}

/// Totals across a run of actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub patched: usize,
    pub previewed: usize,
    pub skipped: usize,
    pub backups: Vec<NormalizedPath>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &ActionOutcome) {
        match outcome {
            ActionOutcome::Skipped => self.skipped += 1,
            ActionOutcome::Previewed => self.previewed += 1,
            ActionOutcome::Patched { backup, .. } => {
                self.patched += 1;
                self.backups.extend(backup.iter().cloned());
            }
        }
    }
}

/// Applies actions one at a time.
#[derive(Debug, Clone, Copy)]
pub struct Synchronizer {
    clock: fn() -> i64,
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synchronizer {
    pub fn new() -> Self {
        Self::with_clock(|| chrono::Utc::now().timestamp_millis())
    }

    /// Use `clock` (epoch milliseconds) for backup names.
    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock }
    }

    /// Apply a single action.
    ///
    /// The status event for the action reaches `reporter` before anything on
    /// disk changes. In [`SyncMode::Apply`], an existing `to` folder is renamed
    /// to `<to>.backup.<millis>` and `from` is copied into its place. The copy
    /// is not atomic; the backup is the recovery path.
    pub fn apply_action(
        &self,
        action: &Action,
        mode: SyncMode,
        reporter: &mut dyn Reporter,
    ) -> Result<ActionOutcome> {
        let (key, from, to) = match action {
            Action::Skip { key, .. } => {
                tracing::info!(%key, "Skip");
                reporter.report(&SyncEvent::Skipping { key: key.clone() });
                return Ok(ActionOutcome::Skipped);
            }
            Action::Patch { key, from, to, .. } => (key, from, to),
        };

        tracing::info!(%key, %from, %to, %mode, "Patch");
        reporter.report(&SyncEvent::Patching {
            key: key.clone(),
            from: from.clone(),
            to: to.clone(),
            mode,
        });

        if mode.is_dry_run() {
            return Ok(ActionOutcome::Previewed);
        }

        // Don't move the local copy aside for a source that can't be copied
        ensure_copy_source(&from.to_native())?;

        let backup = backup_in_place(to, (self.clock)())?;
        if let Some(path) = &backup {
            reporter.report(&SyncEvent::BackupCreated { path: path.clone() });
        }

        let stats = copy_dir_recursive(&from.to_native(), &to.to_native())?;
        tracing::info!(%from, %to, files = stats.files, bytes = stats.bytes, "Copied installed folder");
        reporter.report(&SyncEvent::Copied {
            from: from.clone(),
            to: to.clone(),
            stats,
        });

        Ok(ActionOutcome::Patched { backup, stats })
    }

    /// Apply `actions` in order, stopping at the first failure. Actions that
    /// already ran keep their effects and backups.
    pub fn apply_all(
        &self,
        actions: &[Action],
        mode: SyncMode,
        reporter: &mut dyn Reporter,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for action in actions {
            let outcome = self.apply_action(action, mode, reporter)?;
            summary.record(&outcome);
        }
        Ok(summary)
    }
}
