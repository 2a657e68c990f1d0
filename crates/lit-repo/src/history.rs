//! Rollback and checkout: moving the active branch's head backward or
//! forward by applying inverse or forward diffs — `spec.md` §4.7.

use std::path::Path;

use lit_hash::Sha1;

use crate::apply::{forward_apply_commit, inverse_apply_commit};
use crate::repository::Repository;
use crate::RepoError;

/// Move the active branch's head backward to `target`, applying the
/// inverse of every commit strictly newer than `target`, in order from
/// most-recent down to least-recent.
pub fn rollback(repo: &mut Repository, root: &Path, target: Sha1) -> Result<(), RepoError> {
    let head = repo.active_branch().head;
    let target_idx = repo
        .active_branch()
        .index_of(target)
        .ok_or(RepoError::CommitNotOnBranch(target))?;

    if target_idx >= head {
        return Err(RepoError::RollbackNotOlder);
    }

    for i in (target_idx + 1..=head).rev() {
        inverse_apply_commit(&repo.active_branch().commits[i])?;
    }

    finish_head_move(repo, root, target_idx)
}

/// Move the active branch's head forward to `target`, applying every
/// commit strictly newer than the current head, in order from
/// least-recent to most-recent (and thus up to `target`).
pub fn checkout(repo: &mut Repository, root: &Path, target: Sha1) -> Result<(), RepoError> {
    let head = repo.active_branch().head;
    let target_idx = repo
        .active_branch()
        .index_of(target)
        .ok_or(RepoError::CommitNotOnBranch(target))?;

    if target_idx <= head {
        return Err(RepoError::CheckoutNotNewer);
    }

    for i in head + 1..=target_idx {
        forward_apply_commit(&repo.active_branch().commits[i])?;
    }

    finish_head_move(repo, root, target_idx)
}

/// Checkout to the head of the active branch — the documented recovery
/// path out of read-only mode (`spec.md` §7).
pub fn checkout_to_head(repo: &mut Repository, root: &Path) -> Result<(), RepoError> {
    let last = repo.active_branch().commits.len() - 1;
    if repo.active_branch().head == last {
        return Ok(());
    }
    let head_sha1 = repo.active_branch().commits[last].sha1;
    checkout(repo, root, head_sha1)
}

fn finish_head_move(repo: &mut Repository, root: &Path, new_head: usize) -> Result<(), RepoError> {
    repo.active_branch_mut().head = new_head;
    let last = repo.active_branch().commits.len() - 1;
    repo.readonly = new_head != last;

    lit_ref::write_branch(root, repo.active_branch())?;
    repo.save_index(root)?;
    Ok(())
}
