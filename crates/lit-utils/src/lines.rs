//! Line-oriented file I/O — `spec.md` §4.2.
//!
//! Ported from the original `lit`'s `src/utl.c` (`freadls`/`fwritels`), but
//! with the REDESIGN FLAG from `spec.md` §9 applied: the C reader truncated
//! any line over 256 bytes and started with a fixed 1024-line buffer it grew
//! in 1024-line steps. Here `read_lines` streams with no upper bound on line
//! length or count; `Vec::with_capacity(1024)` below is only a sizing hint
//! for the common case, not a ceiling.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::{Result, UtilError};

/// Read a text file into a sequence of lines with the trailing `\n` (or
/// `\r\n`) stripped. UTF-8 is assumed, matching `spec.md` §4.2; invalid
/// bytes are replaced per `String::from_utf8_lossy` rather than read
/// failing outright, since a VCS should not refuse to diff a file just
/// because one historical revision had an encoding slip.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::with_capacity(1024);
    for raw in reader.split(b'\n') {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        lines.push(String::from_utf8_lossy(&raw).into_owned());
    }
    // A trailing newline produces one spurious empty element after the
    // final real line (split on a terminator yields an empty tail);
    // written files always end in `\n` (see `write_lines`), so drop it.
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

/// Write `lines` to `path`, one per line with a trailing `\n`. Creates any
/// missing parent directories with owner-only permissions (`rwx` for owner,
/// `rx` for group/other — i.e. `0750`, matching the original C
/// `MKDIR_MOWNER`). Failure to create a parent directory is fatal, per
/// `spec.md` §4.2.
pub fn write_lines(path: impl AsRef<Path>, lines: &[impl AsRef<str>]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_owner_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    for line in lines {
        file.write_all(line.as_ref().as_bytes())?;
        file.write_all(b"\n")?;
    }
    Ok(())
}

/// Create `dir` and all missing ancestors with owner-only permissions.
pub fn create_owner_dir_all(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| UtilError::CreateParentDir {
        path: dir.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // 0750: rwx for owner, rx for group/other, per spec.md §4.2.
        let _ = fs::set_permissions(dir, fs::Permissions::from_mode(0o750));
    }

    Ok(())
}
