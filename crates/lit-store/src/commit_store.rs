use std::fs;
use std::path::Path;

use lit_hash::Sha1;
use lit_object::Commit;
use lit_utils::create_owner_dir_all;

use crate::{diff_store, paths, StoreError};

/// Write a commit's diffs (each to its own fan-out location) followed by
/// the commit object itself — `spec.md` §4.5, ported from the original
/// `write_commit`.
pub fn write_commit(root: &Path, commit: &Commit) -> Result<(), StoreError> {
    for diff in &commit.changes {
        diff_store::write_diff(root, diff)?;
    }

    let path = paths::commit_path(root, commit.sha1);
    if let Some(parent) = path.parent() {
        create_owner_dir_all(parent).map_err(|source| StoreError::CreateFanout {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, commit.serialize()).map_err(|source| StoreError::WriteObject { path, source })
}

/// Read a commit by hash, resolving each of its diffs from the diff store
/// in the order the commit object names them.
pub fn read_commit(root: &Path, sha1: Sha1) -> Result<Commit, StoreError> {
    let path = paths::commit_path(root, sha1);
    let text = fs::read_to_string(&path).map_err(|source| StoreError::ReadObject {
        path: path.clone(),
        source,
    })?;
    let header = Commit::parse_header(&text)?;

    let mut changes = Vec::with_capacity(header.crcs.len());
    for crc in &header.crcs {
        changes.push(diff_store::read_diff(root, *crc)?);
    }

    Ok(Commit::from_parts(header, changes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_diff::Diff;

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let commit = Commit::new("first", vec![Diff::folder_new("a"), Diff::folder_new("b")]);

        write_commit(dir.path(), &commit).unwrap();
        let read_back = read_commit(dir.path(), commit.sha1).unwrap();
        assert_eq!(read_back, commit);
    }
}
