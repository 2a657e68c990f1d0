use lit_hash::{sha1, Sha1};

use crate::{Commit, ObjectError};

/// A branch: a named, ordered history of commits with a head pointer —
/// `spec.md` §3, §4.5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub sha1: Sha1,
    /// Index into `commits` of the commit currently materialised in the
    /// working tree. `head <= commits.len() - 1`.
    pub head: usize,
    pub commits: Vec<Commit>,
}

/// The header fields of a branch object plus the hash list of its commits,
/// without each commit resolved from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchHeader {
    pub name: String,
    pub sha1: Sha1,
    pub head: usize,
    pub commit_hashes: Vec<Sha1>,
}

impl Branch {
    /// `sha1 = sha1(name)` — the redesigned, non-address-salted identity
    /// from `spec.md` §9.
    pub fn new(name: impl Into<String>, commits: Vec<Commit>, head: usize) -> Self {
        let name = name.into();
        let sha1 = sha1(name.as_bytes());
        Self {
            name,
            sha1,
            head,
            commits,
        }
    }

    pub fn head_commit(&self) -> &Commit {
        &self.commits[self.head]
    }

    pub fn index_of(&self, sha1: Sha1) -> Option<usize> {
        self.commits.iter().position(|c| c.sha1 == sha1)
    }

    /// `name:<name>\nsha1:<hex>\nidx:<head>\ncount:<N>\n<commit_sha1_1>\n…`
    pub fn serialize(&self) -> String {
        let mut out = format!(
            "name:{}\nsha1:{}\nidx:{}\ncount:{}\n",
            self.name,
            self.sha1,
            self.head,
            self.commits.len(),
        );
        for commit in &self.commits {
            out.push_str(&commit.sha1.to_hex());
            out.push('\n');
        }
        out
    }

    pub fn parse_header(text: &str) -> Result<BranchHeader, ObjectError> {
        let mut lines = text.lines();

        let name = lines
            .next()
            .and_then(|l| l.strip_prefix("name:"))
            .ok_or_else(|| ObjectError::MalformedBranchHeader("missing name line".into()))?
            .to_string();
        let sha1_hex = lines
            .next()
            .and_then(|l| l.strip_prefix("sha1:"))
            .ok_or_else(|| ObjectError::MalformedBranchHeader("missing sha1 line".into()))?;
        let sha1 = Sha1::from_hex(sha1_hex)?;
        let head: usize = lines
            .next()
            .and_then(|l| l.strip_prefix("idx:"))
            .ok_or_else(|| ObjectError::MalformedBranchHeader("missing idx line".into()))?
            .parse()
            .map_err(|_| ObjectError::MalformedBranchHeader("bad idx".into()))?;
        let count: usize = lines
            .next()
            .and_then(|l| l.strip_prefix("count:"))
            .ok_or_else(|| ObjectError::MalformedBranchHeader("missing count line".into()))?
            .parse()
            .map_err(|_| ObjectError::MalformedBranchHeader("bad count".into()))?;

        let mut commit_hashes = Vec::with_capacity(count);
        for line in lines.by_ref().take(count) {
            commit_hashes.push(Sha1::from_hex(line)?);
        }
        if commit_hashes.len() != count {
            return Err(ObjectError::MalformedBranchHeader(format!(
                "declared {count} commits, found {}",
                commit_hashes.len()
            )));
        }

        Ok(BranchHeader {
            name,
            sha1,
            head,
            commit_hashes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_diff::Diff;

    #[test]
    fn sha1_is_derived_from_name_only() {
        let a = Branch::new("origin", Vec::new(), 0);
        let b = Branch::new("origin", vec![Commit::new("x", vec![Diff::folder_new("y")])], 0);
        assert_eq!(a.sha1, b.sha1);
    }

    #[test]
    fn different_names_differ() {
        let a = Branch::new("origin", Vec::new(), 0);
        let b = Branch::new("dev", Vec::new(), 0);
        assert_ne!(a.sha1, b.sha1);
    }

    #[test]
    fn header_roundtrip() {
        let commit = Commit::new("hi", vec![Diff::folder_new("x")]);
        let expected_hash = commit.sha1;
        let branch = Branch::new("origin", vec![commit], 0);

        let header = Branch::parse_header(&branch.serialize()).unwrap();
        assert_eq!(header.name, "origin");
        assert_eq!(header.sha1, branch.sha1);
        assert_eq!(header.head, 0);
        assert_eq!(header.commit_hashes, vec![expected_hash]);
    }
}
