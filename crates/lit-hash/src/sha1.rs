use std::fmt;
use std::str::FromStr;

use crate::hex::{hex_decode, hex_encode};
use crate::HashError;

/// A SHA-1 digest: commit and branch identity in `lit`.
///
/// `lit` uses SHA-1 purely for content identity, never for trust (see
/// `spec.md` §1 Non-goals — no cryptographic authentication of commits).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha1([u8; 20]);

impl Sha1 {
    /// The all-zero SHA-1, used as a sentinel for "no commit yet".
    pub const NULL: Self = Self([0u8; 20]);

    /// Raw 20-byte digest.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase 40-character hex form.
    pub fn to_hex(&self) -> String {
        let mut buf = [0u8; 40];
        hex_encode(&self.0, &mut buf);
        // SAFETY: hex_encode only ever writes ASCII hex digits.
        unsafe { String::from_utf8_unchecked(buf.to_vec()) }
    }

    /// Parse a 40-character hex string. Fails on any non-hex character or on
    /// any length other than exactly 40.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        if hex.len() != 40 {
            return Err(HashError::InvalidHexLength { actual: hex.len() });
        }
        let mut bytes = [0u8; 20];
        hex_decode(hex, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// The first two hex characters, used as the fan-out directory name
    /// under `.lit/objects/commits/`.
    pub fn fanout_prefix(&self) -> String {
        self.to_hex()[..2].to_string()
    }

    /// The remaining 38 hex characters, used as the filename within the
    /// fan-out directory.
    pub fn fanout_tail(&self) -> String {
        self.to_hex()[2..].to_string()
    }
}

impl fmt::Display for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha1({})", self.to_hex())
    }
}

impl FromStr for Sha1 {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Compute the SHA-1 digest of `data`.
///
/// `lit` hashes only commit metadata it generates itself, never
/// attacker-supplied pack data, so the plain `sha1` crate (not the
/// collision-checked `sha1-checked` a full git implementation needs for
/// untrusted object content) is the right tool here.
pub fn sha1(data: &[u8]) -> Sha1 {
    use sha1::Digest;
    let mut hasher = sha1::Sha1::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest);
    Sha1(out)
}
