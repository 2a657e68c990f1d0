use std::fs;
use std::path::Path;

use lit_object::Branch;
use lit_store::paths;
use lit_utils::create_owner_dir_all;

use crate::RefError;

/// Persist `branch` at `.lit/refs/heads/<name>`, writing (or overwriting —
/// content-addressed, so idempotent) each of its commits into the object
/// store along the way.
pub fn write_branch(root: &Path, branch: &Branch) -> Result<(), RefError> {
    for commit in &branch.commits {
        lit_store::write_commit(root, commit)?;
    }

    let path = paths::branch_path(root, &branch.name);
    if let Some(parent) = path.parent() {
        create_owner_dir_all(parent).map_err(|source| RefError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, branch.serialize()).map_err(|source| RefError::WriteFile { path, source })
}

/// Read the branch named `name`, resolving each commit named in its header
/// from the object store.
pub fn read_branch(root: &Path, name: &str) -> Result<Branch, RefError> {
    let path = paths::branch_path(root, name);
    let text = fs::read_to_string(&path).map_err(|source| RefError::ReadFile {
        path: path.clone(),
        source,
    })?;
    let header = Branch::parse_header(&text)?;

    let mut commits = Vec::with_capacity(header.commit_hashes.len());
    for hash in &header.commit_hashes {
        commits.push(lit_store::read_commit(root, *hash)?);
    }

    Ok(Branch {
        name: header.name,
        sha1: header.sha1,
        head: header.head,
        commits,
    })
}

pub fn branch_exists(root: &Path, name: &str) -> bool {
    paths::branch_path(root, name).is_file()
}

pub fn delete_branch(root: &Path, name: &str) -> Result<(), RefError> {
    let path = paths::branch_path(root, name);
    fs::remove_file(&path).map_err(|source| RefError::WriteFile { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_diff::Diff;
    use lit_object::Commit;

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let commit = Commit::new("first", vec![Diff::folder_new("x")]);
        let branch = Branch::new("origin", vec![commit], 0);

        write_branch(dir.path(), &branch).unwrap();
        let read_back = read_branch(dir.path(), "origin").unwrap();
        assert_eq!(read_back, branch);
    }

    #[test]
    fn delete_removes_ref_file() {
        let dir = tempfile::tempdir().unwrap();
        let branch = Branch::new("origin", Vec::new(), 0);
        write_branch(dir.path(), &branch).unwrap();
        assert!(branch_exists(dir.path(), "origin"));

        delete_branch(dir.path(), "origin").unwrap();
        assert!(!branch_exists(dir.path(), "origin"));
    }
}
