//! Recursive directory copy
//!
//! The copy is not atomic as a whole: an interruption can leave the destination
//! partially populated. Callers that care keep a backup of the previous
//! destination (see [`crate::backup`]).

use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{Error, Result};

/// Totals gathered while copying a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CopyStats {
    /// Directories visited, including the top-level destination.
    pub directories: usize,
    /// Regular files copied.
    pub files: usize,
    /// Bytes written across all files.
    pub bytes: u64,
}

impl CopyStats {
    fn absorb(&mut self, other: CopyStats) {
        self.directories += other.directories;
        self.files += other.files;
        self.bytes += other.bytes;
    }
}

/// Check that `from` is usable as a copy source: it must exist and be a
/// directory, and no symlink below it may lead back into one of its own
/// parents.
///
/// Walks the whole tree without writing anything, so callers can validate a
/// source before touching the destination.
pub fn ensure_copy_source(from: &Path) -> Result<()> {
    require_source_dir(from)?;
    let root = dunce::canonicalize(from).map_err(|e| Error::io(from, e))?;
    reject_link_cycles(from, &mut vec![root])
}

/// Copy the whole tree at `from` into a directory at `to`.
///
/// Directories are created as needed and recursed into; files are copied
/// byte-for-byte, replacing any same-named file already at the destination.
/// Symlinks are followed and their targets copied.
///
/// At every level of the tree:
/// - a source that exists but is not a directory fails with
///   [`Error::CopySourceNotDirectory`] before anything is written;
/// - a destination that exists but is not a directory fails with
///   [`Error::CopyDestinationNotDirectory`].
///
/// A source containing a symlink cycle fails with [`Error::CopySourceLoop`]
/// before anything is written. A missing source is reported as an I/O error.
pub fn copy_dir_recursive(from: &Path, to: &Path) -> Result<CopyStats> {
    ensure_copy_source(from)?;
    copy_level(from, to)
}

fn copy_level(from: &Path, to: &Path) -> Result<CopyStats> {
    require_source_dir(from)?;

    match fs::metadata(to) {
        Ok(meta) if !meta.is_dir() => {
            return Err(Error::CopyDestinationNotDirectory {
                path: to.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            fs::create_dir_all(to).map_err(|e| Error::io(to, e))?;
        }
        Err(e) => return Err(Error::io(to, e)),
    }

    let mut stats = CopyStats {
        directories: 1,
        ..CopyStats::default()
    };

    for entry in sorted_entries(from)? {
        let source = entry.path();
        let target = to.join(entry.file_name());

        if is_dir_entry(&entry)? {
            stats.absorb(copy_level(&source, &target)?);
        } else {
            let bytes = fs::copy(&source, &target).map_err(|e| Error::io(&target, e))?;
            tracing::trace!(from = %source.display(), to = %target.display(), bytes, "Copied file");
            stats.files += 1;
            stats.bytes += bytes;
        }
    }

    Ok(stats)
}

fn require_source_dir(from: &Path) -> Result<()> {
    let meta = fs::metadata(from).map_err(|e| Error::io(from, e))?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(Error::CopySourceNotDirectory {
            path: from.to_path_buf(),
        })
    }
}

/// Fail if a symlinked directory below `dir` resolves to one of `ancestors`
/// (canonical paths, innermost last). Dangling links fail as I/O errors.
fn reject_link_cycles(dir: &Path, ancestors: &mut Vec<PathBuf>) -> Result<()> {
    for entry in sorted_entries(dir)? {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;

        let canonical = if file_type.is_symlink() {
            let meta = fs::metadata(&path).map_err(|e| Error::io(&path, e))?;
            if !meta.is_dir() {
                continue;
            }
            let target = dunce::canonicalize(&path).map_err(|e| Error::io(&path, e))?;
            if ancestors.contains(&target) {
                return Err(Error::CopySourceLoop { path });
            }
            target
        } else if file_type.is_dir() {
            match ancestors.last() {
                Some(parent) => parent.join(entry.file_name()),
                None => dunce::canonicalize(&path).map_err(|e| Error::io(&path, e))?,
            }
        } else {
            continue;
        };

        ancestors.push(canonical);
        let result = reject_link_cycles(&path, ancestors);
        ancestors.pop();
        result?;
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

/// Entry type without following links, except that a link is judged by what
/// it points at.
fn is_dir_entry(entry: &DirEntry) -> Result<bool> {
    let path = entry.path();
    let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
    if file_type.is_symlink() {
        let meta = fs::metadata(&path).map_err(|e| Error::io(&path, e))?;
        Ok(meta.is_dir())
    } else {
        Ok(file_type.is_dir())
    }
}
