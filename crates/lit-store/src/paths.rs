use std::path::{Path, PathBuf};

use lit_hash::{Crc32, Sha1};

/// `.lit/` root under a working directory.
pub fn lit_dir(root: &Path) -> PathBuf {
    root.join(".lit")
}

pub fn objects_dir(root: &Path) -> PathBuf {
    lit_dir(root).join("objects")
}

pub fn commits_dir(root: &Path) -> PathBuf {
    objects_dir(root).join("commits")
}

pub fn diffs_dir(root: &Path) -> PathBuf {
    objects_dir(root).join("diffs")
}

pub fn shelved_dir(root: &Path, branch_name: &str) -> PathBuf {
    objects_dir(root).join("shelved").join(branch_name)
}

pub fn refs_heads_dir(root: &Path) -> PathBuf {
    lit_dir(root).join("refs").join("heads")
}

pub fn refs_tags_dir(root: &Path) -> PathBuf {
    lit_dir(root).join("refs").join("tags")
}

pub fn index_path(root: &Path) -> PathBuf {
    lit_dir(root).join("index")
}

pub fn config_path(root: &Path) -> PathBuf {
    lit_dir(root).join("config")
}

/// `.lit/objects/commits/<hex[0:2]>/<hex[2:40]>` — `spec.md` §4.5.
pub fn commit_path(root: &Path, sha1: Sha1) -> PathBuf {
    commits_dir(root)
        .join(sha1.fanout_prefix())
        .join(sha1.fanout_tail())
}

/// `.lit/objects/diffs/<crc[0:2]>/<crc[2:]>`, CRC in zero-padded decimal —
/// `spec.md` §4.5.
pub fn diff_path(root: &Path, crc: Crc32) -> PathBuf {
    diffs_dir(root)
        .join(crc.fanout_prefix())
        .join(crc.fanout_tail())
}

pub fn branch_path(root: &Path, name: &str) -> PathBuf {
    refs_heads_dir(root).join(name)
}

pub fn tag_path(root: &Path, name: &str) -> PathBuf {
    refs_tags_dir(root).join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_hash::{crc32, sha1};
    use std::path::Path;

    #[test]
    fn commit_path_splits_fanout() {
        let hash = sha1(b"hello");
        let path = commit_path(Path::new("/repo"), hash);
        let expected = format!(
            "/repo/.lit/objects/commits/{}/{}",
            hash.fanout_prefix(),
            hash.fanout_tail()
        );
        assert_eq!(path, Path::new(&expected));
    }

    #[test]
    fn diff_path_uses_decimal_crc() {
        let crc = crc32(b"hello");
        let path = diff_path(Path::new("/repo"), crc);
        let expected = format!(
            "/repo/.lit/objects/diffs/{}/{}",
            crc.fanout_prefix(),
            crc.fanout_tail()
        );
        assert_eq!(path, Path::new(&expected));
    }
}
