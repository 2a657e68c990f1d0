//! Directory enumeration — `spec.md` §4.3.
//!
//! Ported from the original `lit`'s `src/inw.c`: `walk` either lists only
//! the direct children of a directory, or walks it depth-first pre-order,
//! skipping `.`/`..` and following symlinks with no special handling (a
//! symlinked directory recurses like any other directory).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::Result;

/// What kind of filesystem entry an [`Inode`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InodeKind {
    File,
    Folder,
}

/// A single filesystem entry collected by [`walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inode {
    pub kind: InodeKind,
    /// Path as seen during traversal (relative to the walk root, joined
    /// through each recursive step).
    pub path: PathBuf,
    /// Leaf name (final path component).
    pub name: String,
    pub mtime: SystemTime,
}

/// Whether [`walk`] descends into subdirectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    NoRecurse,
    Recurse,
}

/// Enumerate the contents of `path`.
///
/// Returns an empty vector if `path` does not exist or is not a directory —
/// callers that need to distinguish "empty" from "absent" should `stat` the
/// path themselves first, matching the original C `inw_walk`, which only
/// ever returns the (possibly empty) vector it built.
pub fn walk(path: impl AsRef<Path>, mode: WalkMode) -> Result<Vec<Inode>> {
    let path = path.as_ref();
    let mut out = Vec::new();

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(out),
        Err(e) => return Err(e.into()),
    };

    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy().to_string();
        if name == "." || name == ".." {
            continue;
        }

        let entry_path = entry.path();
        let metadata = fs::metadata(&entry_path)?;
        let kind = if metadata.is_dir() {
            InodeKind::Folder
        } else {
            InodeKind::File
        };

        out.push(Inode {
            kind,
            path: entry_path.clone(),
            name,
            mtime: metadata.modified()?,
        });

        if mode == WalkMode::Recurse && kind == InodeKind::Folder {
            out.extend(walk(&entry_path, mode)?);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn no_recurse_lists_direct_children_only() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("b.txt")).unwrap();

        let entries = walk(dir.path(), WalkMode::NoRecurse).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|e| e.name == "a.txt" && e.kind == InodeKind::File));
        assert!(entries.iter().any(|e| e.name == "sub" && e.kind == InodeKind::Folder));
    }

    #[test]
    fn recurse_walks_depth_first_pre_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("b.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let entries = walk(dir.path(), WalkMode::Recurse).unwrap();
        assert_eq!(entries.len(), 3);
        let sub_idx = entries.iter().position(|e| e.name == "sub").unwrap();
        let b_idx = entries.iter().position(|e| e.name == "b.txt").unwrap();
        assert!(sub_idx < b_idx, "folder must be listed before its children");
    }

    #[test]
    fn missing_directory_returns_empty() {
        let entries = walk("/no/such/path/at/all", WalkMode::NoRecurse).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn empty_directory_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries = walk(dir.path(), WalkMode::Recurse).unwrap();
        assert!(entries.is_empty());
    }
}
