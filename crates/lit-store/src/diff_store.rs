use std::fs;
use std::path::Path;

use lit_diff::Diff;
use lit_hash::Crc32;
use lit_utils::create_owner_dir_all;

use crate::{paths, StoreError};

/// Write `diff` to its content-addressed location under `root`, creating
/// the fan-out directory if needed.
pub fn write_diff(root: &Path, diff: &Diff) -> Result<(), StoreError> {
    let path = paths::diff_path(root, diff.crc);
    if let Some(parent) = path.parent() {
        create_owner_dir_all(parent).map_err(|source| StoreError::CreateFanout {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, diff.serialize()).map_err(|source| StoreError::WriteObject { path, source })
}

/// Read the diff stored at the fan-out location for `crc`.
pub fn read_diff(root: &Path, crc: Crc32) -> Result<Diff, StoreError> {
    let path = paths::diff_path(root, crc);
    let text = fs::read_to_string(&path).map_err(|source| StoreError::ReadObject {
        path: path.clone(),
        source,
    })?;
    Ok(Diff::parse(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let diff = Diff::folder_new("x/y");

        write_diff(dir.path(), &diff).unwrap();
        let read_back = read_diff(dir.path(), diff.crc).unwrap();
        assert_eq!(read_back, diff);
    }
}
