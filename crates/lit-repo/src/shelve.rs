//! Shelving: staging `add`/`delete` operations per branch ahead of a
//! `commit` that drains them into a new [`Commit`] — `spec.md` §4.12.
//!
//! Grounded on the original `lit`'s `handle_add`/`handle_delete` and their
//! shared `add_delete_inode` helper in `cli.c`: a plain file is diffed
//! against the most recent commit that touched it (new if none is found,
//! modified otherwise), a folder is recorded as a single folder-kind diff
//! and, unless `--no-recurse` was given, every file beneath it is staged
//! the same way.

use std::path::Path;

use lit_diff::{Diff, DiffKind};
use lit_object::Commit;
use lit_utils::{walk, InodeKind, WalkMode};

use crate::repository::Repository;
use crate::RepoError;

/// Whether a directory `add`/`delete` descends into its contents —
/// `spec.md` §9 Open Question 1: recurse by default, `--no-recurse` opts
/// out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurse {
    Yes,
    No,
}

/// Find the most recent diff on `branch`, walking from its head backward,
/// whose `new_path` is `path` and whose kind is `FileNew` or
/// `FileModified` — a file most recently deleted counts as untracked, so a
/// later `add` of the same path is a new file again.
fn find_recent_file_diff<'a>(branch: &'a lit_object::Branch, path: &str) -> Option<&'a Diff> {
    if branch.commits.is_empty() {
        return None;
    }
    for commit in branch.commits[..=branch.head].iter().rev() {
        for diff in commit.changes.iter().rev() {
            if diff.new_path != path {
                continue;
            }
            return match diff.kind {
                DiffKind::FileNew | DiffKind::FileModified => Some(diff),
                DiffKind::FileDeleted => None,
                _ => None,
            };
        }
    }
    None
}

/// Find the most recent diff on `branch` recording `path` as a tracked
/// folder (new or modified), the folder analogue of
/// [`find_recent_file_diff`].
fn folder_is_tracked(branch: &lit_object::Branch, path: &str) -> bool {
    if branch.commits.is_empty() {
        return false;
    }
    for commit in branch.commits[..=branch.head].iter().rev() {
        for diff in commit.changes.iter().rev() {
            if diff.new_path != path {
                continue;
            }
            return matches!(diff.kind, DiffKind::FolderNew | DiffKind::FolderModified);
        }
    }
    false
}

fn stage_file(root: &Path, branch_name: &str, branch: &lit_object::Branch, path: &Path) -> Result<(), RepoError> {
    let path_str = path.to_string_lossy().into_owned();
    let diff = match find_recent_file_diff(branch, &path_str) {
        Some(prior) => Diff::file_modified_from_prior(&prior.forward_lines(), path)?,
        None => Diff::file_new(path)?,
    };
    lit_store::shelve(root, branch_name, &diff)?;
    Ok(())
}

/// Stage `path` for the next commit on the active branch. A file is
/// diffed against its most recent tracked content; a folder is recorded
/// once for itself and, when `recurse` is [`Recurse::Yes`], every file
/// beneath it is staged too.
pub fn shelve_add(
    repo: &Repository,
    root: &Path,
    path: &Path,
    recurse: Recurse,
) -> Result<(), RepoError> {
    if repo.readonly {
        return Err(RepoError::ReadOnly);
    }
    let branch = repo.active_branch();
    let branch_name = branch.name.clone();

    if path.is_dir() {
        let path_str = path.to_string_lossy().into_owned();
        if !folder_is_tracked(branch, &path_str) {
            let diff = Diff::folder_new(path);
            lit_store::shelve(root, &branch_name, &diff)?;
        }
        if recurse == Recurse::Yes {
            for inode in walk(path, WalkMode::Recurse)? {
                if inode.kind == InodeKind::File {
                    stage_file(root, &branch_name, branch, &inode.path)?;
                }
            }
        }
    } else {
        stage_file(root, &branch_name, branch, path)?;
    }
    Ok(())
}

/// Stage removal of `path`. A file is recorded as `file-deleted`; a folder
/// is recorded as `folder-deleted` and, when `recurse` is [`Recurse::Yes`],
/// every file still beneath it on disk is staged as deleted too.
pub fn shelve_delete(
    repo: &Repository,
    root: &Path,
    path: &Path,
    recurse: Recurse,
) -> Result<(), RepoError> {
    if repo.readonly {
        return Err(RepoError::ReadOnly);
    }
    let branch_name = repo.active_branch().name.clone();

    if path.is_dir() {
        if recurse == Recurse::Yes {
            for inode in walk(path, WalkMode::Recurse)? {
                if inode.kind == InodeKind::File {
                    let diff = Diff::file_deleted(&inode.path)?;
                    lit_store::shelve(root, &branch_name, &diff)?;
                }
            }
        }
        let diff = Diff::folder_deleted(path);
        lit_store::shelve(root, &branch_name, &diff)?;
    } else {
        let diff = Diff::file_deleted(path)?;
        lit_store::shelve(root, &branch_name, &diff)?;
    }
    Ok(())
}

/// Drain the active branch's shelving area into a new commit, append it,
/// advance the head, and re-create an empty shelving area for the next
/// round of staging. Fails if nothing is shelved, or the repository is
/// read-only — `spec.md` §4.12, §7.
pub fn commit(repo: &mut Repository, root: &Path, message: &str) -> Result<Commit, RepoError> {
    if repo.readonly {
        return Err(RepoError::ReadOnly);
    }
    let branch_name = repo.active_branch().name.clone();

    let diffs = lit_store::read_shelved_diffs(root, &branch_name)?;
    if diffs.is_empty() {
        return Err(RepoError::NothingShelved);
    }

    let new_commit = Commit::new(message, diffs);
    lit_store::write_commit(root, &new_commit)?;

    lit_store::clear_shelved(root, &branch_name)?;
    lit_store::create_shelved_dir(root, &branch_name)?;

    let branch = repo.active_branch_mut();
    branch.commits.push(new_commit.clone());
    branch.head = branch.commits.len() - 1;
    lit_ref::write_branch(root, branch)?;
    repo.save_index(root)?;

    Ok(new_commit)
}
