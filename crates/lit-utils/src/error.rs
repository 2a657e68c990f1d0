/// Errors from inode walking and line I/O.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    #[error("failed to create parent directory '{path}': {source}")]
    CreateParentDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
