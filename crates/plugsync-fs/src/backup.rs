//! Backup-by-rename
//!
//! A backup is the original directory moved aside to a sibling named
//! `<path>.backup.<epoch-millis>`. Backups are never rotated or removed.

use std::fs;
use std::io;

use crate::{Error, NormalizedPath, Result};

/// Infix between the original path and the timestamp.
pub const BACKUP_MARKER: &str = ".backup.";

/// Sibling path a backup of `path` taken at `timestamp_ms` lives at.
pub fn backup_path_for(path: &NormalizedPath, timestamp_ms: i64) -> NormalizedPath {
    path.with_suffix(&format!("{BACKUP_MARKER}{timestamp_ms}"))
}

/// Move `path` aside with a single `rename`.
///
/// Returns `Ok(None)` when there is nothing at `path`. Refuses to replace an
/// existing entry at the backup location.
pub fn backup_in_place(path: &NormalizedPath, timestamp_ms: i64) -> Result<Option<NormalizedPath>> {
    if !path.exists() {
        return Ok(None);
    }

    let backup = backup_path_for(path, timestamp_ms);
    if backup.exists() {
        return Err(Error::io(
            backup.to_native(),
            io::Error::new(io::ErrorKind::AlreadyExists, "backup target already exists"),
        ));
    }

    fs::rename(path.to_native(), backup.to_native()).map_err(|e| Error::io(path.to_native(), e))?;
    tracing::info!(from = %path, to = %backup, "Moved existing folder to backup");

    Ok(Some(backup))
}
