//! The top-level `Repository` value: `{readonly, idx, branches}` —
//! `spec.md` §3. Every history/change-set operation in this crate takes a
//! `&mut Repository` plus the working-directory root and writes back
//! whatever it touched; nothing is cached across process invocations.

use std::fs;
use std::path::Path;

use lit_object::Branch;
use lit_ref::RepoIndex;
use lit_store::paths;

use crate::RepoError;

/// The distinguished branch every repository starts with — `spec.md` §9.
pub const ORIGIN: &str = "origin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub readonly: bool,
    pub idx: usize,
    pub branches: Vec<Branch>,
}

impl Repository {
    /// Create `.lit/` under `root` and the `origin` branch. Fails if
    /// `.lit/` already exists — `spec.md` §7.
    pub fn init(root: &Path) -> Result<Self, RepoError> {
        let lit_dir = paths::lit_dir(root);
        if lit_dir.exists() {
            return Err(RepoError::AlreadyExists(lit_dir));
        }

        for dir in [
            paths::lit_dir(root),
            paths::objects_dir(root),
            paths::commits_dir(root),
            paths::diffs_dir(root),
            paths::objects_dir(root).join("shelved"),
            root.join(".lit").join("refs"),
            paths::refs_heads_dir(root),
            paths::refs_tags_dir(root),
        ] {
            create_dir_0755(&dir)?;
        }

        let origin = Branch::new(ORIGIN, Vec::new(), 0);
        lit_store::create_shelved_dir(root, ORIGIN)?;
        lit_ref::write_branch(root, &origin)?;

        let index = RepoIndex::new(0, false, vec![ORIGIN.to_string()]);
        index.write(root)?;

        Ok(Self {
            readonly: false,
            idx: 0,
            branches: vec![origin],
        })
    }

    /// Load the repository rooted at `root`. Fails if `.lit/index` is
    /// missing — `spec.md` §7.
    pub fn load(root: &Path) -> Result<Self, RepoError> {
        if !RepoIndex::exists(root) {
            return Err(RepoError::IndexMissing(paths::index_path(root)));
        }
        let index = RepoIndex::read(root)?;

        let mut branches = Vec::with_capacity(index.branch_names.len());
        for name in &index.branch_names {
            branches.push(lit_ref::read_branch(root, name)?);
        }

        Ok(Self {
            readonly: index.readonly,
            idx: index.active,
            branches,
        })
    }

    /// Persist the repository index (active branch, readonly flag, branch
    /// name list). Individual branches are written separately by whichever
    /// operation modified them.
    pub fn save_index(&self, root: &Path) -> Result<(), RepoError> {
        let index = RepoIndex::new(
            self.idx,
            self.readonly,
            self.branches.iter().map(|b| b.name.clone()).collect(),
        );
        index.write(root)?;
        Ok(())
    }

    pub fn active_branch(&self) -> &Branch {
        &self.branches[self.idx]
    }

    pub fn active_branch_mut(&mut self) -> &mut Branch {
        &mut self.branches[self.idx]
    }

    pub fn find_branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name == name)
    }

    pub fn find_branch_idx(&self, name: &str) -> Option<usize> {
        self.branches.iter().position(|b| b.name == name)
    }
}

fn create_dir_0755(dir: &Path) -> Result<(), RepoError> {
    fs::create_dir_all(dir)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_origin_branch_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        assert_eq!(repo.branches.len(), 1);
        assert_eq!(repo.active_branch().name, ORIGIN);
        assert!(paths::index_path(dir.path()).is_file());
        assert!(paths::refs_heads_dir(dir.path()).join(ORIGIN).is_file());
    }

    #[test]
    fn init_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let err = Repository::init(dir.path()).unwrap_err();
        assert!(matches!(err, RepoError::AlreadyExists(_)));
    }

    #[test]
    fn load_without_init_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Repository::load(dir.path()).unwrap_err();
        assert!(matches!(err, RepoError::IndexMissing(_)));
    }

    #[test]
    fn init_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let created = Repository::init(dir.path()).unwrap();
        let loaded = Repository::load(dir.path()).unwrap();
        assert_eq!(created, loaded);
    }
}
