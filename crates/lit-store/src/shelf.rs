use std::fs;
use std::path::Path;

use lit_diff::Diff;
use lit_utils::{create_owner_dir_all, walk, Inode, WalkMode};

use crate::{paths, StoreError};

/// Create the per-branch shelving directory. Called once, when the branch
/// itself is created — `spec.md` §4.12 treats a missing shelving area as
/// corruption, not something `shelve` repairs on the fly.
pub fn create_shelved_dir(root: &Path, branch_name: &str) -> Result<(), StoreError> {
    let dir = paths::shelved_dir(root, branch_name);
    create_owner_dir_all(&dir).map_err(|source| StoreError::CreateFanout {
        path: dir,
        source,
    })
}

/// Write `diff` into the shelving area of `branch_name` as `<crc>.diff`.
/// Fails if the shelving area does not already exist.
pub fn shelve(root: &Path, branch_name: &str, diff: &Diff) -> Result<(), StoreError> {
    let dir = paths::shelved_dir(root, branch_name);
    if !dir.is_dir() {
        return Err(StoreError::ShelvedAreaMissing(branch_name.to_string()));
    }

    let path = dir.join(format!("{}.diff", diff.crc));
    fs::write(&path, diff.serialize()).map_err(|source| StoreError::WriteObject { path, source })
}

/// The inodes currently shelved on `branch_name` (non-recursive).
pub fn collect_shelved(root: &Path, branch_name: &str) -> Result<Vec<Inode>, StoreError> {
    let dir = paths::shelved_dir(root, branch_name);
    Ok(walk(dir, WalkMode::NoRecurse)?)
}

/// Read every shelved diff for `branch_name`, sorted by file name so commit
/// construction is deterministic across runs.
pub fn read_shelved_diffs(root: &Path, branch_name: &str) -> Result<Vec<Diff>, StoreError> {
    let mut inodes = collect_shelved(root, branch_name)?;
    inodes.sort_by(|a, b| a.name.cmp(&b.name));

    let mut diffs = Vec::with_capacity(inodes.len());
    for inode in &inodes {
        let text = fs::read_to_string(&inode.path).map_err(|source| StoreError::ReadObject {
            path: inode.path.clone(),
            source,
        })?;
        diffs.push(Diff::parse(&text)?);
    }
    Ok(diffs)
}

/// Remove every shelved file for `branch_name`, then the now-empty
/// directory itself — the drain step of a commit, per `spec.md` §4.12.
pub fn clear_shelved(root: &Path, branch_name: &str) -> Result<(), StoreError> {
    let dir = paths::shelved_dir(root, branch_name);
    for inode in collect_shelved(root, branch_name)? {
        fs::remove_file(&inode.path).map_err(|source| StoreError::WriteObject {
            path: inode.path.clone(),
            source,
        })?;
    }
    if dir.is_dir() {
        fs::remove_dir(&dir).map_err(|source| StoreError::WriteObject { path: dir, source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shelve_requires_existing_area() {
        let dir = tempfile::tempdir().unwrap();
        let diff = Diff::folder_new("a");
        let err = shelve(dir.path(), "origin", &diff).unwrap_err();
        assert!(matches!(err, StoreError::ShelvedAreaMissing(_)));
    }

    #[test]
    fn shelve_then_collect_then_clear() {
        let dir = tempfile::tempdir().unwrap();
        create_shelved_dir(dir.path(), "origin").unwrap();

        let diff = Diff::folder_new("a");
        shelve(dir.path(), "origin", &diff).unwrap();

        let collected = collect_shelved(dir.path(), "origin").unwrap();
        assert_eq!(collected.len(), 1);

        let diffs = read_shelved_diffs(dir.path(), "origin").unwrap();
        assert_eq!(diffs, vec![diff]);

        clear_shelved(dir.path(), "origin").unwrap();
        assert!(!paths::shelved_dir(dir.path(), "origin").exists());
    }
}
