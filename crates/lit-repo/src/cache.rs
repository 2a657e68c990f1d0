//! Cache scavenger: mark-and-sweep over `.lit/objects/`, removing commits
//! and diffs no branch references any more — `spec.md` §4.13.
//!
//! Grounded on the original `lit`'s `scan_object_cache` in `cache.c`: walk
//! every object on disk, mark the ones reachable from some branch's commit
//! or diff list, and remove everything left unmarked. Shelved files are
//! deliberately not considered reachable here — `cache.c` never consulted
//! the shelving area either, so a pending `add` that is never committed is
//! swept away by `clear-cache` exactly as it always was.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lit_store::paths;

use crate::repository::Repository;
use crate::RepoError;

/// Remove every object under `.lit/objects/` that is not reachable from
/// any branch's commit or diff list. Returns the paths removed, so a
/// `debug`-gated caller can report exactly what was swept (`spec.md`
/// §4.14); callers that only need the count can take `.len()`.
pub fn clear_cache(repo: &Repository, root: &Path) -> Result<Vec<PathBuf>, RepoError> {
    let mut referenced: HashSet<PathBuf> = HashSet::new();
    for branch in &repo.branches {
        for commit in &branch.commits {
            referenced.insert(paths::commit_path(root, commit.sha1));
            for diff in &commit.changes {
                referenced.insert(paths::diff_path(root, diff.crc));
            }
        }
    }

    let mut removed = Vec::new();
    for inode in lit_store::list_objects(root)? {
        if inode.kind == lit_utils::InodeKind::File && !referenced.contains(&inode.path) {
            lit_store::remove_object(&inode.path)?;
            removed.push(inode.path);
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shelve::{commit, shelve_add, Recurse};
    use std::fs;

    #[test]
    fn referenced_objects_survive_a_sweep() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let mut repo = Repository::init(root).unwrap();

        let file = root.join("a.txt");
        fs::write(&file, "x\n").unwrap();
        shelve_add(&repo, root, &file, Recurse::Yes).unwrap();
        commit(&mut repo, root, "first").unwrap();

        let removed = clear_cache(&repo, root).unwrap();
        assert_eq!(removed.len(), 0);

        let sha1 = repo.active_branch().commits[0].sha1;
        assert!(paths::commit_path(root, sha1).is_file());
    }

    #[test]
    fn orphaned_objects_are_swept() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let repo = Repository::init(root).unwrap();

        let diff = lit_diff::Diff::folder_new("orphan");
        lit_store::write_diff(root, &diff).unwrap();
        assert!(paths::diff_path(root, diff.crc).is_file());

        let removed = clear_cache(&repo, root).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(!paths::diff_path(root, diff.crc).exists());
    }

    #[test]
    fn shelved_but_uncommitted_files_are_swept_too() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let repo = Repository::init(root).unwrap();

        let file = root.join("a.txt");
        fs::write(&file, "x\n").unwrap();
        shelve_add(&repo, root, &file, Recurse::Yes).unwrap();

        // The shelving area lives under .lit/objects/shelved, inside the
        // same tree clear_cache walks; a pending add with no commit yet
        // has no branch referencing it, so it is swept just like an
        // orphaned commit or diff would be.
        let removed = clear_cache(&repo, root).unwrap();
        assert_eq!(removed.len(), 1);
    }
}
