/// Errors from diff construction, serialisation, and parsing.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed diff header: {0}")]
    MalformedHeader(String),

    #[error("unknown diff type tag '{0}'")]
    UnknownKind(u8),

    #[error(transparent)]
    Util(#[from] lit_utils::UtilError),
}
