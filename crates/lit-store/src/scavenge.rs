use std::fs;
use std::path::Path;

use lit_utils::{walk, Inode, WalkMode};

use crate::{paths, StoreError};

/// Every inode under `.lit/objects/`, recursively — the mark-and-sweep
/// candidate set for the cache scavenger (`spec.md` §4.13). Referencing
/// logic lives one layer up, since it needs the repository's branch list.
pub fn list_objects(root: &Path) -> Result<Vec<Inode>, StoreError> {
    Ok(walk(paths::objects_dir(root), WalkMode::Recurse)?)
}

/// Remove `path`, then remove its parent directory too if `path` was the
/// only entry left in it — `spec.md` §4.13: "if the containing fan-out
/// directory has become a singleton whose only remaining entry was the
/// just-removed file, remove that directory too."
///
/// Returns whether the parent directory was also removed.
pub fn remove_object(path: &Path) -> Result<bool, StoreError> {
    let parent = path.parent().map(|p| p.to_path_buf());
    let was_only_entry = match &parent {
        Some(parent) => walk(parent, WalkMode::NoRecurse)?.len() == 1,
        None => false,
    };

    fs::remove_file(path).map_err(|source| StoreError::WriteObject {
        path: path.to_path_buf(),
        source,
    })?;

    if was_only_entry {
        if let Some(parent) = parent {
            fs::remove_dir(&parent).map_err(|source| StoreError::WriteObject {
                path: parent,
                source,
            })?;
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn lists_nested_objects() {
        let dir = tempfile::tempdir().unwrap();
        let fanout = paths::objects_dir(dir.path()).join("diffs").join("zz");
        fs::create_dir_all(&fanout).unwrap();
        File::create(fanout.join("orphan")).unwrap();

        let objects = list_objects(dir.path()).unwrap();
        assert!(objects.iter().any(|i| i.name == "orphan"));
    }

    #[test]
    fn removing_sole_entry_prunes_parent() {
        let dir = tempfile::tempdir().unwrap();
        let fanout = paths::objects_dir(dir.path()).join("diffs").join("zz");
        fs::create_dir_all(&fanout).unwrap();
        let file = fanout.join("orphan");
        File::create(&file).unwrap();

        let parent_removed = remove_object(&file).unwrap();
        assert!(parent_removed);
        assert!(!fanout.exists());
    }

    #[test]
    fn removing_one_of_several_keeps_parent() {
        let dir = tempfile::tempdir().unwrap();
        let fanout = paths::objects_dir(dir.path()).join("diffs").join("zz");
        fs::create_dir_all(&fanout).unwrap();
        let a = fanout.join("a");
        let b = fanout.join("b");
        File::create(&a).unwrap();
        File::create(&b).unwrap();

        let parent_removed = remove_object(&a).unwrap();
        assert!(!parent_removed);
        assert!(fanout.exists());
    }
}
