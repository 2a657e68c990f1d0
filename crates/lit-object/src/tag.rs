use lit_hash::Sha1;

use crate::ObjectError;

/// A named pointer to a commit within a branch — `spec.md` §3, §4.11.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub commit_hash: Sha1,
    pub branch_hash: Sha1,
}

impl Tag {
    pub fn new(name: impl Into<String>, commit_hash: Sha1, branch_hash: Sha1) -> Self {
        Self {
            name: name.into(),
            commit_hash,
            branch_hash,
        }
    }

    /// `msg:<name>\ncommit:<hex>\nbranch:<hex>\n`
    pub fn serialize(&self) -> String {
        format!(
            "msg:{}\ncommit:{}\nbranch:{}\n",
            self.name,
            self.commit_hash.to_hex(),
            self.branch_hash.to_hex(),
        )
    }

    pub fn parse(text: &str) -> Result<Self, ObjectError> {
        let mut lines = text.lines();

        let name = lines
            .next()
            .and_then(|l| l.strip_prefix("msg:"))
            .ok_or_else(|| ObjectError::MalformedTag("missing msg line".into()))?
            .to_string();
        let commit_hex = lines
            .next()
            .and_then(|l| l.strip_prefix("commit:"))
            .ok_or_else(|| ObjectError::MalformedTag("missing commit line".into()))?;
        let commit_hash = Sha1::from_hex(commit_hex)?;
        let branch_hex = lines
            .next()
            .and_then(|l| l.strip_prefix("branch:"))
            .ok_or_else(|| ObjectError::MalformedTag("missing branch line".into()))?;
        let branch_hash = Sha1::from_hex(branch_hex)?;

        Ok(Self {
            name,
            commit_hash,
            branch_hash,
        })
    }
}
