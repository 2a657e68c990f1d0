/// Errors produced by hash and hex/decimal parsing.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidHex { position: usize, character: char },

    #[error("invalid sha1 hex length: expected 40, got {actual}")]
    InvalidHexLength { actual: usize },

    #[error("invalid crc32 decimal string: '{0}'")]
    InvalidDecimal(String),
}
