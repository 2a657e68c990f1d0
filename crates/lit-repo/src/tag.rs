//! Tag create/delete, wired to the active branch's commit list —
//! `spec.md` §4.11.

use std::path::Path;

use lit_hash::Sha1;
use lit_object::Tag;

use crate::repository::Repository;
use crate::RepoError;

/// Create and persist a tag named `name` pointing at `commit` on the
/// active branch. Fails if the commit is not on the active branch or the
/// tag name is already taken — tag names are unique across the repository
/// (`spec.md` §3).
pub fn add_tag(repo: &Repository, root: &Path, commit: Sha1, name: &str) -> Result<Tag, RepoError> {
    if lit_ref::tag_exists(root, name) {
        return Err(RepoError::TagAlreadyExists(name.to_string()));
    }
    let active = repo.active_branch();
    active
        .index_of(commit)
        .ok_or(RepoError::CommitNotOnBranch(commit))?;

    let tag = Tag::new(name, commit, active.sha1);
    lit_ref::write_tag(root, &tag)?;
    Ok(tag)
}

/// Delete the tag named `name`. Fails if it does not exist.
pub fn delete_tag(root: &Path, name: &str) -> Result<(), RepoError> {
    if !lit_ref::tag_exists(root, name) {
        return Err(RepoError::TagNotFound(name.to_string()));
    }
    lit_ref::delete_tag(root, name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;
    use lit_diff::Diff;
    use lit_object::Commit;

    #[test]
    fn add_tag_then_filter_then_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = Repository::init(dir.path()).unwrap();
        let commit = Commit::new("first", vec![Diff::folder_new("a")]);
        let sha1 = commit.sha1;
        repo.active_branch_mut().commits.push(commit);
        repo.active_branch_mut().head = 0;
        lit_ref::write_branch(dir.path(), repo.active_branch()).unwrap();

        add_tag(&repo, dir.path(), sha1, "milestone").unwrap();
        let tags = lit_ref::read_tags(dir.path()).unwrap();
        assert_eq!(tags.len(), 1);
        let filtered = lit_ref::filter_tags(repo.active_branch().sha1, &tags);
        assert_eq!(filtered.len(), 1);

        delete_tag(dir.path(), "milestone").unwrap();
        assert!(lit_ref::read_tags(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn add_tag_for_commit_not_on_branch_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let phantom = Commit::new("ghost", vec![Diff::folder_new("a")]).sha1;
        let err = add_tag(&repo, dir.path(), phantom, "t").unwrap_err();
        assert!(matches!(err, RepoError::CommitNotOnBranch(_)));
    }

    #[test]
    fn delete_missing_tag_fails() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let err = delete_tag(dir.path(), "nope").unwrap_err();
        assert!(matches!(err, RepoError::TagNotFound(_)));
    }

    #[test]
    fn duplicate_tag_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = Repository::init(dir.path()).unwrap();
        let commit = Commit::new("first", vec![Diff::folder_new("a")]);
        let sha1 = commit.sha1;
        repo.active_branch_mut().commits.push(commit);
        repo.active_branch_mut().head = 0;
        lit_ref::write_branch(dir.path(), repo.active_branch()).unwrap();

        add_tag(&repo, dir.path(), sha1, "milestone").unwrap();
        let err = add_tag(&repo, dir.path(), sha1, "milestone").unwrap_err();
        assert!(matches!(err, RepoError::TagAlreadyExists(_)));
    }
}
