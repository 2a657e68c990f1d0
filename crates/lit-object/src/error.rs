/// Errors from commit/branch construction, serialisation, and parsing.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("malformed commit header: {0}")]
    MalformedCommitHeader(String),

    #[error("malformed branch header: {0}")]
    MalformedBranchHeader(String),

    #[error("malformed tag: {0}")]
    MalformedTag(String),

    #[error(transparent)]
    Hash(#[from] lit_hash::HashError),

    #[error(transparent)]
    Diff(#[from] lit_diff::DiffError),
}
