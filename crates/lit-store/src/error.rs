use std::path::PathBuf;

/// Errors from reading, writing, or enumerating the content-addressable
/// object store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create fan-out directory '{path}': {source}")]
    CreateFanout {
        path: PathBuf,
        #[source]
        source: lit_utils::UtilError,
    },

    #[error("failed to read object at '{path}': {source}")]
    ReadObject {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write object at '{path}': {source}")]
    WriteObject {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shelved area for branch '{0}' does not exist; possible branch corruption")]
    ShelvedAreaMissing(String),

    #[error(transparent)]
    Object(#[from] lit_object::ObjectError),

    #[error(transparent)]
    Diff(#[from] lit_diff::DiffError),

    #[error(transparent)]
    Util(#[from] lit_utils::UtilError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
