use std::fs;
use std::path::Path;

use lit_store::paths;

use crate::RefError;

/// The repository index at `.lit/index` — `spec.md` §4.5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIndex {
    pub active: usize,
    pub readonly: bool,
    pub branch_names: Vec<String>,
}

impl RepoIndex {
    pub fn new(active: usize, readonly: bool, branch_names: Vec<String>) -> Self {
        Self {
            active,
            readonly,
            branch_names,
        }
    }

    /// `active:<idx>\ncount:<N>\nreadonly:<0|1>\n0:<name>\n1:<name>\n…`
    pub fn serialize(&self) -> String {
        let mut out = format!(
            "active:{}\ncount:{}\nreadonly:{}\n",
            self.active,
            self.branch_names.len(),
            self.readonly as u8,
        );
        for (i, name) in self.branch_names.iter().enumerate() {
            out.push_str(&format!("{i}:{name}\n"));
        }
        out
    }

    pub fn parse(text: &str) -> Result<Self, RefError> {
        let mut lines = text.lines();

        let active: usize = lines
            .next()
            .and_then(|l| l.strip_prefix("active:"))
            .ok_or_else(|| RefError::MalformedIndex("missing active line".into()))?
            .parse()
            .map_err(|_| RefError::MalformedIndex("bad active".into()))?;
        let count: usize = lines
            .next()
            .and_then(|l| l.strip_prefix("count:"))
            .ok_or_else(|| RefError::MalformedIndex("missing count line".into()))?
            .parse()
            .map_err(|_| RefError::MalformedIndex("bad count".into()))?;
        let readonly_flag: u8 = lines
            .next()
            .and_then(|l| l.strip_prefix("readonly:"))
            .ok_or_else(|| RefError::MalformedIndex("missing readonly line".into()))?
            .parse()
            .map_err(|_| RefError::MalformedIndex("bad readonly".into()))?;
        let readonly = readonly_flag != 0;

        let mut branch_names = Vec::with_capacity(count);
        for line in lines.by_ref().take(count) {
            let (_, name) = line
                .split_once(':')
                .ok_or_else(|| RefError::MalformedIndex(format!("bad branch line: {line}")))?;
            branch_names.push(name.to_string());
        }
        if branch_names.len() != count {
            return Err(RefError::MalformedIndex(format!(
                "declared {count} branches, found {}",
                branch_names.len()
            )));
        }

        Ok(Self {
            active,
            readonly,
            branch_names,
        })
    }

    pub fn write(&self, root: &Path) -> Result<(), RefError> {
        let path = paths::index_path(root);
        fs::write(&path, self.serialize()).map_err(|source| RefError::WriteFile { path, source })
    }

    pub fn read(root: &Path) -> Result<Self, RefError> {
        let path = paths::index_path(root);
        let text = fs::read_to_string(&path).map_err(|source| RefError::ReadFile {
            path: path.clone(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn exists(root: &Path) -> bool {
        paths::index_path(root).is_file()
    }
}
