use std::fs;
use std::path::Path;

use lit_hash::Sha1;
use lit_object::Tag;
use lit_store::paths;
use lit_utils::{walk, WalkMode};

use crate::RefError;

/// Persist `tag` at `.lit/refs/tags/<name>`.
pub fn write_tag(root: &Path, tag: &Tag) -> Result<(), RefError> {
    let path = paths::tag_path(root, &tag.name);
    if let Some(parent) = path.parent() {
        lit_utils::create_owner_dir_all(parent).map_err(|source| RefError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, tag.serialize()).map_err(|source| RefError::WriteFile { path, source })
}

pub fn delete_tag(root: &Path, name: &str) -> Result<(), RefError> {
    let path = paths::tag_path(root, name);
    fs::remove_file(&path).map_err(|source| RefError::WriteFile { path, source })
}

pub fn tag_exists(root: &Path, name: &str) -> bool {
    paths::tag_path(root, name).is_file()
}

/// Parse every file under `.lit/refs/tags/` into a [`Tag`].
pub fn read_tags(root: &Path) -> Result<Vec<Tag>, RefError> {
    let dir = paths::refs_tags_dir(root);
    let inodes = walk(&dir, WalkMode::NoRecurse).unwrap_or_default();

    let mut tags = Vec::with_capacity(inodes.len());
    for inode in inodes {
        let text = fs::read_to_string(&inode.path).map_err(|source| RefError::ReadFile {
            path: inode.path.clone(),
            source,
        })?;
        tags.push(Tag::parse(&text)?);
    }
    Ok(tags)
}

/// The subset of `tags` whose branch hash equals `branch_hash`.
pub fn filter_tags(branch_hash: Sha1, tags: &[Tag]) -> Vec<Tag> {
    tags.iter()
        .filter(|t| t.branch_hash == branch_hash)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_hash::sha1;

    #[test]
    fn write_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let tag = Tag::new("milestone", sha1(b"commit"), sha1(b"branch"));
        write_tag(dir.path(), &tag).unwrap();

        let tags = read_tags(dir.path()).unwrap();
        assert_eq!(tags, vec![tag]);
    }

    #[test]
    fn filter_by_branch_hash() {
        let branch_a = sha1(b"a");
        let branch_b = sha1(b"b");
        let tags = vec![
            Tag::new("t1", sha1(b"c1"), branch_a),
            Tag::new("t2", sha1(b"c2"), branch_b),
        ];
        let filtered = filter_tags(branch_a, &tags);
        assert_eq!(filtered, vec![tags[0].clone()]);
    }

    #[test]
    fn delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let tag = Tag::new("milestone", sha1(b"commit"), sha1(b"branch"));
        write_tag(dir.path(), &tag).unwrap();
        assert!(tag_exists(dir.path(), "milestone"));

        delete_tag(dir.path(), "milestone").unwrap();
        assert!(!tag_exists(dir.path(), "milestone"));
    }
}
