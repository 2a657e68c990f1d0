//! Branch create/delete/switch and common-ancestor detection —
//! `spec.md` §4.8, §4.9.

use std::path::Path;

use lit_object::{Branch, Commit};

use crate::apply::{forward_apply_commit, inverse_apply_commit};
use crate::repository::{Repository, ORIGIN};
use crate::RepoError;

/// Create branch `name` from `source`, copying the source's commits up to
/// and including its head. Commits are shared by value (cloned), matching
/// `spec.md` §4.8's "copies commits from a source branch" — they are not
/// re-created, so their hashes and content are identical to the source's.
pub fn create_branch(
    repo: &mut Repository,
    root: &Path,
    name: &str,
    source: &str,
) -> Result<(), RepoError> {
    if repo.find_branch(name).is_some() {
        return Err(RepoError::BranchAlreadyExists(name.to_string()));
    }
    let source_branch = repo
        .find_branch(source)
        .ok_or_else(|| RepoError::BranchNotFound(source.to_string()))?;

    let commits: Vec<Commit> = if source_branch.commits.is_empty() {
        Vec::new()
    } else {
        source_branch.commits[..=source_branch.head].to_vec()
    };
    let head = commits.len().saturating_sub(1);
    let branch = Branch::new(name, commits, head);

    lit_store::create_shelved_dir(root, name)?;
    lit_ref::write_branch(root, &branch)?;
    repo.branches.push(branch);
    repo.save_index(root)?;
    Ok(())
}

/// Delete branch `name`. Fails on `origin` or an absent branch —
/// `spec.md` §4.8.
pub fn delete_branch(repo: &mut Repository, root: &Path, name: &str) -> Result<(), RepoError> {
    if name == ORIGIN {
        return Err(RepoError::CannotDeleteOrigin);
    }
    let idx = repo
        .find_branch_idx(name)
        .ok_or_else(|| RepoError::BranchNotFound(name.to_string()))?;

    lit_ref::delete_branch(root, name)?;
    repo.branches.remove(idx);
    if repo.idx > idx {
        repo.idx -= 1;
    } else if repo.idx == idx {
        // The active branch was removed out from under us; fall back to
        // origin, mirroring the CLI-level "switching back to origin
        // branch" behaviour in the original.
        repo.idx = repo.find_branch_idx(ORIGIN).unwrap_or(0);
    }
    repo.save_index(root)?;
    Ok(())
}

/// Switch the active branch to `target` — `spec.md` §4.8. Inverse-applies
/// the current branch back to (but not including) the common ancestor,
/// then forward-applies the target branch from the ancestor's successor up
/// to its head. If no common ancestor exists, warns and resets wholesale.
pub fn switch_branch(repo: &mut Repository, root: &Path, target: &str) -> Result<(), RepoError> {
    let target_idx = repo
        .find_branch_idx(target)
        .ok_or_else(|| RepoError::BranchNotFound(target.to_string()))?;

    let current = repo.active_branch().clone();
    let destination = repo.branches[target_idx].clone();

    match common_ancestor(&current, &destination) {
        Some(ancestor) => {
            let current_ancestor_idx = current.index_of(ancestor.sha1).expect(
                "common_ancestor returns a commit that exists in both branches by construction",
            );
            for i in (current_ancestor_idx + 1..=current.head).rev() {
                inverse_apply_commit(&current.commits[i])?;
            }
            let dest_ancestor_idx = destination
                .index_of(ancestor.sha1)
                .expect("ancestor exists in destination by construction");
            for i in dest_ancestor_idx + 1..=destination.head {
                forward_apply_commit(&destination.commits[i])?;
            }
        }
        None => {
            eprintln!(
                "warning: no common ancestor between '{}' and '{}'; resetting working tree",
                current.name, destination.name
            );
            for commit in current.commits[..=current.head].iter().rev() {
                inverse_apply_commit(commit)?;
            }
            for commit in &destination.commits[..=destination.head] {
                forward_apply_commit(commit)?;
            }
        }
    }

    repo.idx = target_idx;
    repo.readonly = false;
    repo.save_index(root)?;
    Ok(())
}

/// Find the most recent commit present in both branches — `spec.md` §4.9.
///
/// Starting from each branch's last commit, repeatedly steps the side with
/// the more recent `rawtime`, matching by `sha1`. Returns `None` if the
/// branches share no commit identity. This preserves the documented
/// weakness from `spec.md` §9: two commits on different branches sharing a
/// wall-clock second can cause the walk to step the wrong side and miss an
/// ancestor that a set-intersection would have found.
pub fn common_ancestor(b1: &Branch, b2: &Branch) -> Option<Commit> {
    if b1.commits.is_empty() || b2.commits.is_empty() {
        return None;
    }

    let mut i = b1.commits.len();
    let mut j = b2.commits.len();

    while i > 0 && j > 0 {
        let a = &b1.commits[i - 1];
        let b = &b2.commits[j - 1];
        if a.sha1 == b.sha1 {
            return Some(a.clone());
        }
        if a.rawtime >= b.rawtime {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_diff::Diff;

    fn commit_on(branch: &mut Branch, msg: &str) {
        let diff = Diff::folder_new(format!("{}-{}", branch.name, msg));
        branch.commits.push(Commit::new(msg, vec![diff]));
        branch.head = branch.commits.len() - 1;
    }

    #[test]
    fn create_branch_copies_commits_up_to_head() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = Repository::init(dir.path()).unwrap();
        commit_on(repo.active_branch_mut(), "first");
        lit_ref::write_branch(dir.path(), repo.active_branch()).unwrap();

        create_branch(&mut repo, dir.path(), "dev", ORIGIN).unwrap();
        let dev = repo.find_branch("dev").unwrap();
        assert_eq!(dev.commits.len(), 1);
        assert_eq!(dev.head, 0);
    }

    #[test]
    fn create_branch_rejects_duplicate_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = Repository::init(dir.path()).unwrap();
        create_branch(&mut repo, dir.path(), "dev", ORIGIN).unwrap();
        let err = create_branch(&mut repo, dir.path(), "dev", ORIGIN).unwrap_err();
        assert!(matches!(err, RepoError::BranchAlreadyExists(_)));
    }

    #[test]
    fn delete_origin_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = Repository::init(dir.path()).unwrap();
        let err = delete_branch(&mut repo, dir.path(), ORIGIN).unwrap_err();
        assert!(matches!(err, RepoError::CannotDeleteOrigin));
    }

    #[test]
    fn common_ancestor_of_shared_history_is_the_fork_point() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = Repository::init(dir.path()).unwrap();
        commit_on(repo.active_branch_mut(), "x");
        lit_ref::write_branch(dir.path(), repo.active_branch()).unwrap();

        create_branch(&mut repo, dir.path(), "dev", ORIGIN).unwrap();
        let fork_sha1 = repo.active_branch().commits[0].sha1;

        // Diverge: origin gets "y", dev gets "z".
        std::thread::sleep(std::time::Duration::from_millis(10));
        commit_on(repo.active_branch_mut(), "y");
        lit_ref::write_branch(dir.path(), repo.active_branch()).unwrap();

        let dev_idx = repo.find_branch_idx("dev").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(10));
        commit_on(&mut repo.branches[dev_idx], "z");
        lit_ref::write_branch(dir.path(), &repo.branches[dev_idx]).unwrap();

        let ancestor = common_ancestor(repo.active_branch(), &repo.branches[dev_idx]).unwrap();
        assert_eq!(ancestor.sha1, fork_sha1);
    }

    #[test]
    fn no_shared_commits_returns_none() {
        let b1 = Branch::new("a", vec![Commit::new("x", vec![Diff::folder_new("p")])], 0);
        let b2 = Branch::new("b", vec![Commit::new("y", vec![Diff::folder_new("q")])], 0);
        assert!(common_ancestor(&b1, &b2).is_none());
    }
}
