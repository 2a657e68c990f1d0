//! Rebase: appending a source branch's commits past the common ancestor
//! onto a destination branch — `spec.md` §4.10.

use std::cmp::min;
use std::path::Path;

use lit_hash::{Crc32, Sha1};

use crate::apply::forward_apply_commit;
use crate::branch::common_ancestor;
use crate::repository::Repository;
use crate::RepoError;

/// One pair of diffs, one from each side, that touch the same `new_path`
/// past the common ancestor, up to and including the commit at the source
/// branch's head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictPair {
    pub source_commit: Sha1,
    pub destination_commit: Sha1,
    pub source_diff_crc: Crc32,
    pub destination_diff_crc: Crc32,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebaseOutcome {
    Success { appended: usize },
    Conflict { pairs: Vec<ConflictPair> },
}

/// Rebase `source` onto `destination`: extend `destination` with the
/// commits `source` carries past their common ancestor, or report every
/// conflicting diff pair without touching either branch.
pub fn rebase(
    repo: &mut Repository,
    root: &Path,
    destination: &str,
    source: &str,
) -> Result<RebaseOutcome, RepoError> {
    let dest_idx = repo
        .find_branch_idx(destination)
        .ok_or_else(|| RepoError::BranchNotFound(destination.to_string()))?;
    let src_idx = repo
        .find_branch_idx(source)
        .ok_or_else(|| RepoError::BranchNotFound(source.to_string()))?;

    let dest_branch = repo.branches[dest_idx].clone();
    let src_branch = repo.branches[src_idx].clone();

    let ancestor = common_ancestor(&dest_branch, &src_branch).ok_or_else(|| {
        RepoError::NoCommonAncestor(destination.to_string(), source.to_string())
    })?;
    let a = dest_branch
        .index_of(ancestor.sha1)
        .expect("ancestor returned by common_ancestor exists in destination");

    let conflict_bound = min(
        src_branch.head,
        min(src_branch.commits.len() - 1, dest_branch.commits.len() - 1),
    );
    let mut pairs = Vec::new();
    for i in a + 1..=conflict_bound {
        let source_commit = &src_branch.commits[i];
        let destination_commit = &dest_branch.commits[i];
        for sd in &source_commit.changes {
            for dd in &destination_commit.changes {
                if sd.new_path == dd.new_path {
                    pairs.push(ConflictPair {
                        source_commit: source_commit.sha1,
                        destination_commit: destination_commit.sha1,
                        source_diff_crc: sd.crc,
                        destination_diff_crc: dd.crc,
                        path: sd.new_path.clone(),
                    });
                }
            }
        }
    }

    if !pairs.is_empty() {
        return Ok(RebaseOutcome::Conflict { pairs });
    }

    let appended: Vec<_> = src_branch.commits[a + 1..].to_vec();
    let appended_count = appended.len();

    let is_active = dest_idx == repo.idx;
    {
        let dest = &mut repo.branches[dest_idx];
        dest.commits.extend(appended);
        if is_active {
            let start = dest.head + 1;
            let end = dest.commits.len();
            for i in start..end {
                forward_apply_commit(&dest.commits[i])?;
            }
            dest.head = dest.commits.len() - 1;
        } else {
            dest.head += appended_count;
        }
    }

    lit_ref::write_branch(root, &repo.branches[dest_idx])?;
    repo.save_index(root)?;
    Ok(RebaseOutcome::Success {
        appended: appended_count,
    })
}
