//! Directory tree snapshots.
//!
//! Two snapshots compare equal iff the trees hold the same relative paths,
//! the same entry kinds, and byte-identical file contents.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// One entry in a [`tree_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEntry {
    Dir,
    /// Hex SHA-256 of the file contents.
    File(String),
}

/// Snapshot every entry below `root`, keyed by forward-slash relative path.
///
/// A missing `root` yields an empty map.
///
/// # Panics
/// Panics if an existing entry cannot be read.
pub fn tree_snapshot(root: &Path) -> BTreeMap<String, TreeEntry> {
    let mut entries = BTreeMap::new();
    if root.exists() {
        walk(root, root, &mut entries);
    }
    entries
}

fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, TreeEntry>) {
    let listing = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("tree_snapshot: failed to read {}: {e}", dir.display()));

    for entry in listing {
        let path = entry
            .unwrap_or_else(|e| panic!("tree_snapshot: bad entry in {}: {e}", dir.display()))
            .path();
        let relative = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");

        if path.is_dir() {
            out.insert(relative, TreeEntry::Dir);
            walk(root, &path, out);
        } else {
            let bytes = fs::read(&path)
                .unwrap_or_else(|e| panic!("tree_snapshot: failed to read {}: {e}", path.display()));
            let digest = Sha256::digest(&bytes);
            let hex = digest.iter().map(|b| format!("{b:02x}")).collect();
            out.insert(relative, TreeEntry::File(hex));
        }
    }
}
