use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use lit_hash::Crc32;

use crate::lcs::lcs_annotate;
use crate::{DiffError, DiffKind};

/// A recorded change to one filesystem entry — `spec.md` §3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    pub kind: DiffKind,
    pub stored_path: String,
    pub new_path: String,
    /// Annotated lines (`" "`, `"+ "`, `"- "` prefixed). Empty for folder kinds.
    pub lines: Vec<String>,
    pub crc: Crc32,
}

impl Diff {
    /// `file-new(path)` — every line prefixed `"+ "`.
    pub fn file_new(path: impl AsRef<Path>) -> Result<Self, DiffError> {
        let path = path.as_ref();
        let data = read_file_lines(path)?;
        let lines = data.into_iter().map(|l| format!("+ {l}")).collect();
        let stored_path = path.to_string_lossy().into_owned();
        Ok(Self::finish(
            DiffKind::FileNew,
            stored_path.clone(),
            stored_path,
            lines,
        ))
    }

    /// `file-deleted(path)` — every line prefixed `"- "`.
    pub fn file_deleted(path: impl AsRef<Path>) -> Result<Self, DiffError> {
        let path = path.as_ref();
        let data = read_file_lines(path)?;
        let lines = data.into_iter().map(|l| format!("- {l}")).collect();
        let stored_path = path.to_string_lossy().into_owned();
        Ok(Self::finish(
            DiffKind::FileDeleted,
            stored_path.clone(),
            stored_path,
            lines,
        ))
    }

    /// `file-modified(old_path, new_path)` — LCS diff over old → new.
    pub fn file_modified(
        old_path: impl AsRef<Path>,
        new_path: impl AsRef<Path>,
    ) -> Result<Self, DiffError> {
        let old_path = old_path.as_ref();
        let new_path = new_path.as_ref();
        let old_data = read_file_lines(old_path)?;
        let new_data = read_file_lines(new_path)?;
        let lines = lcs_annotate(&old_data, &new_data);
        Ok(Self::finish(
            DiffKind::FileModified,
            old_path.to_string_lossy().into_owned(),
            new_path.to_string_lossy().into_owned(),
            lines,
        ))
    }

    /// `file-modified` diff comparing `prior_lines` — the file's content as
    /// reconstructed from the most recent commit that touched it — against
    /// the live contents of `path`, with `stored_path == new_path == path`.
    /// This is the modify-in-place case the shelving engine builds for a
    /// repeat `add` on a tracked file, where there is no second file on
    /// disk to hand to [`Diff::file_modified`].
    pub fn file_modified_from_prior(
        prior_lines: &[String],
        path: impl AsRef<Path>,
    ) -> Result<Self, DiffError> {
        let path = path.as_ref();
        let new_data = read_file_lines(path)?;
        let lines = lcs_annotate(prior_lines, &new_data);
        let path_str = path.to_string_lossy().into_owned();
        Ok(Self::finish(DiffKind::FileModified, path_str.clone(), path_str, lines))
    }

    /// `folder-new(path)` — empty-lines diff.
    pub fn folder_new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_string_lossy().into_owned();
        Self::finish(DiffKind::FolderNew, path.clone(), path, Vec::new())
    }

    /// `folder-deleted(path)` — empty-lines diff.
    pub fn folder_deleted(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_string_lossy().into_owned();
        Self::finish(DiffKind::FolderDeleted, path.clone(), path, Vec::new())
    }

    /// `folder-modified(old_path, new_path)` — empty-lines diff recording a rename.
    pub fn folder_modified(old_path: impl AsRef<Path>, new_path: impl AsRef<Path>) -> Self {
        Self::finish(
            DiffKind::FolderModified,
            old_path.as_ref().to_string_lossy().into_owned(),
            new_path.as_ref().to_string_lossy().into_owned(),
            Vec::new(),
        )
    }

    fn finish(kind: DiffKind, stored_path: String, new_path: String, lines: Vec<String>) -> Self {
        let crc = fingerprint(kind, &stored_path, &new_path, &lines);
        Self {
            kind,
            stored_path,
            new_path,
            lines,
            crc,
        }
    }

    /// Lines of the entry's content as it exists after this diff.
    pub fn forward_lines(&self) -> Vec<String> {
        crate::lcs::forward_materialise(&self.lines)
    }

    /// Lines of the entry's content as it existed before this diff.
    pub fn inverse_lines(&self) -> Vec<String> {
        crate::lcs::inverse_materialise(&self.lines)
    }

    /// `type:<int>\nstored:<path>\nnew:<path>\ncrc32:<uint>\n\n<line>\n…`
    pub fn serialize(&self) -> String {
        let mut out = format!(
            "type:{}\nstored:{}\nnew:{}\ncrc32:{}\n\n",
            self.kind.as_u8(),
            self.stored_path,
            self.new_path,
            self.crc
        );
        if !self.kind.is_folder() {
            for line in &self.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    pub fn parse(text: &str) -> Result<Self, DiffError> {
        let mut lines_iter = text.lines();

        let type_line = lines_iter
            .next()
            .ok_or_else(|| DiffError::MalformedHeader("missing type line".into()))?;
        let tag: u8 = type_line
            .strip_prefix("type:")
            .ok_or_else(|| DiffError::MalformedHeader(format!("bad type line: {type_line}")))?
            .parse()
            .map_err(|_| DiffError::MalformedHeader(format!("bad type line: {type_line}")))?;
        let kind = DiffKind::from_u8(tag)?;

        let stored_line = lines_iter
            .next()
            .ok_or_else(|| DiffError::MalformedHeader("missing stored line".into()))?;
        let stored_path = stored_line
            .strip_prefix("stored:")
            .ok_or_else(|| DiffError::MalformedHeader(format!("bad stored line: {stored_line}")))?
            .to_string();

        let new_line = lines_iter
            .next()
            .ok_or_else(|| DiffError::MalformedHeader("missing new line".into()))?;
        let new_path = new_line
            .strip_prefix("new:")
            .ok_or_else(|| DiffError::MalformedHeader(format!("bad new line: {new_line}")))?
            .to_string();

        let crc_line = lines_iter
            .next()
            .ok_or_else(|| DiffError::MalformedHeader("missing crc32 line".into()))?;
        let crc: Crc32 = crc_line
            .strip_prefix("crc32:")
            .ok_or_else(|| DiffError::MalformedHeader(format!("bad crc32 line: {crc_line}")))?
            .parse()
            .map_err(|_| DiffError::MalformedHeader(format!("bad crc32 line: {crc_line}")))?;

        // blank separator line
        let _ = lines_iter.next();

        let lines: Vec<String> = if kind.is_folder() {
            Vec::new()
        } else {
            lines_iter.map(|l| l.to_string()).collect()
        };

        Ok(Self {
            kind,
            stored_path,
            new_path,
            lines,
            crc,
        })
    }
}

fn read_file_lines(path: &Path) -> Result<Vec<String>, DiffError> {
    lit_utils::read_lines(path).map_err(|source| DiffError::ReadFile {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::Other, source),
    })
}

/// Hashes the serialised annotated lines followed by a header of `kind`,
/// `stored_path`, `new_path`, and the current wall-clock second — `spec.md`
/// §4.2. Diffs created at different instants with identical content
/// therefore receive different CRCs by design.
fn fingerprint(kind: DiffKind, stored_path: &str, new_path: &str, lines: &[String]) -> Crc32 {
    let mut buf = String::new();
    for line in lines {
        buf.push_str(line);
        buf.push('\n');
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    buf.push_str(&format!(
        "kind:{}\nstored:{stored_path}\nnew:{new_path}\nmtime:{now}\n",
        kind.as_u8()
    ));
    lit_hash::crc32(buf.as_bytes())
}
