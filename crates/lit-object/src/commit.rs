use chrono::Local;

use lit_diff::Diff;
use lit_hash::{sha1, Crc32, Sha1};

use crate::ObjectError;

/// A commit: an ordered sequence of diffs recorded under one message and
/// timestamp — `spec.md` §3, §4.5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub message: String,
    /// Wall-clock string, `%Y-%m-%d %H:%M:%S` in local time.
    pub timestamp: String,
    pub rawtime: i64,
    pub sha1: Sha1,
    pub changes: Vec<Diff>,
}

/// The header fields of a commit object, without its diffs resolved from
/// disk. [`crate::commit::Commit::parse_header`] returns this; the object
/// store crate turns it into a full [`Commit`] by reading each diff named
/// in `crcs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    pub message: String,
    pub timestamp: String,
    pub rawtime: i64,
    pub sha1: Sha1,
    pub crcs: Vec<Crc32>,
}

impl Commit {
    /// Create a new commit over `changes`, stamped with the current local
    /// time.
    ///
    /// `sha1` is `sha1(message || rawtime || concat(diff.crc for diff in
    /// changes))` — the redesigned, non-address-salted identity from
    /// `spec.md` §9 (the original folds the in-memory address of the
    /// changes list into the hash, which makes "the same" commit produce a
    /// different SHA on every process run).
    pub fn new(message: impl Into<String>, changes: Vec<Diff>) -> Self {
        let message = message.into();
        let now = Local::now();
        let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
        let rawtime = now.timestamp();

        let sha1 = compute_sha1(&message, rawtime, &changes);

        Self {
            message,
            timestamp,
            rawtime,
            sha1,
            changes,
        }
    }

    /// Reassemble a commit from a parsed header and its diffs, read from
    /// the object store in the order the header's `crcs` named them.
    pub fn from_parts(header: CommitHeader, changes: Vec<Diff>) -> Self {
        Self {
            message: header.message,
            timestamp: header.timestamp,
            rawtime: header.rawtime,
            sha1: header.sha1,
            changes,
        }
    }

    /// `message:<msg>\ntimestamp:<iso>\nsha1:<hex>\ncount:<N>\nrawtime:<seconds>\n<crc_1>\n…`
    pub fn serialize(&self) -> String {
        let mut out = format!(
            "message:{}\ntimestamp:{}\nsha1:{}\ncount:{}\nrawtime:{}\n",
            self.message,
            self.timestamp,
            self.sha1,
            self.changes.len(),
            self.rawtime,
        );
        for diff in &self.changes {
            out.push_str(&diff.crc.to_string());
            out.push('\n');
        }
        out
    }

    /// Parse the header and list of diff CRCs; does not resolve diffs.
    pub fn parse_header(text: &str) -> Result<CommitHeader, ObjectError> {
        let mut lines = text.lines();

        let message = lines
            .next()
            .and_then(|l| l.strip_prefix("message:"))
            .ok_or_else(|| ObjectError::MalformedCommitHeader("missing message line".into()))?
            .to_string();
        let timestamp = lines
            .next()
            .and_then(|l| l.strip_prefix("timestamp:"))
            .ok_or_else(|| ObjectError::MalformedCommitHeader("missing timestamp line".into()))?
            .to_string();
        let sha1_hex = lines
            .next()
            .and_then(|l| l.strip_prefix("sha1:"))
            .ok_or_else(|| ObjectError::MalformedCommitHeader("missing sha1 line".into()))?;
        let sha1 = Sha1::from_hex(sha1_hex)?;
        let count: usize = lines
            .next()
            .and_then(|l| l.strip_prefix("count:"))
            .ok_or_else(|| ObjectError::MalformedCommitHeader("missing count line".into()))?
            .parse()
            .map_err(|_| ObjectError::MalformedCommitHeader("bad count".into()))?;
        let rawtime: i64 = lines
            .next()
            .and_then(|l| l.strip_prefix("rawtime:"))
            .ok_or_else(|| ObjectError::MalformedCommitHeader("missing rawtime line".into()))?
            .parse()
            .map_err(|_| ObjectError::MalformedCommitHeader("bad rawtime".into()))?;

        let mut crcs = Vec::with_capacity(count);
        for line in lines.by_ref().take(count) {
            let crc: Crc32 = line
                .parse()
                .map_err(|_| ObjectError::MalformedCommitHeader(format!("bad crc line: {line}")))?;
            crcs.push(crc);
        }
        if crcs.len() != count {
            return Err(ObjectError::MalformedCommitHeader(format!(
                "declared {count} diffs, found {}",
                crcs.len()
            )));
        }

        Ok(CommitHeader {
            message,
            timestamp,
            rawtime,
            sha1,
            crcs,
        })
    }
}

fn compute_sha1(message: &str, rawtime: i64, changes: &[Diff]) -> Sha1 {
    let mut buf = String::new();
    buf.push_str(message);
    buf.push_str(&rawtime.to_string());
    for diff in changes {
        buf.push_str(&diff.crc.to_string());
    }
    sha1(buf.as_bytes())
}
