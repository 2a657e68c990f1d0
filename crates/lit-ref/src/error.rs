use std::path::PathBuf;

/// Errors from reading or writing the repository index, branch refs, or
/// tag refs.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("malformed repository index: {0}")]
    MalformedIndex(String),

    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: lit_utils::UtilError,
    },

    #[error(transparent)]
    Store(#[from] lit_store::StoreError),

    #[error(transparent)]
    Object(#[from] lit_object::ObjectError),

    #[error(transparent)]
    Hash(#[from] lit_hash::HashError),
}
