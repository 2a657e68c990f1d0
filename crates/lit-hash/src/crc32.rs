use std::fmt;
use std::str::FromStr;

use crate::HashError;

/// A CRC-32 fingerprint, used to give each diff a short, collision-resistant
/// (but not cryptographic) identity for fan-out storage.
///
/// Historical quirk carried over unchanged from the original `lit`: its
/// string form is **decimal**, not hex, despite `spec.md` §9 flagging this as
/// an open question. Preserved as-is so the on-disk fan-out layout
/// (`.lit/objects/diffs/<first-2-decimal-digits>/...`) stays bit-compatible.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Crc32(u32);

impl Crc32 {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn from_u32(v: u32) -> Self {
        Self(v)
    }

    /// Decimal string, zero-padded to at least 4 digits so the two-digit
    /// fan-out prefix always exists even for small CRC values.
    pub fn to_decimal(&self) -> String {
        format!("{:04}", self.0)
    }

    pub fn from_decimal(s: &str) -> Result<Self, HashError> {
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| HashError::InvalidDecimal(s.to_string()))
    }

    /// The first two decimal digits, used as the fan-out directory name
    /// under `.lit/objects/diffs/`.
    pub fn fanout_prefix(&self) -> String {
        self.to_decimal()[..2].to_string()
    }

    /// Everything after the fan-out prefix.
    pub fn fanout_tail(&self) -> String {
        self.to_decimal()[2..].to_string()
    }
}

impl fmt::Display for Crc32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl fmt::Debug for Crc32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crc32({})", self.to_decimal())
    }
}

impl FromStr for Crc32 {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

/// The standard reflected CRC-32 (IEEE 802.3, polynomial 0xEDB88320), as
/// used by `zip`/`gzip` and by the original `lit`'s `src/hash.c`. Computed
/// with `crc32fast`, which picks a SIMD-accelerated table at runtime rather
/// than the bit-at-a-time loop the original C source used.
pub fn crc32(data: &[u8]) -> Crc32 {
    Crc32(crc32fast::hash(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(crc32(b"").value(), 0);
    }

    #[test]
    fn known_vector() {
        // Standard CRC-32/IEEE check value for the ASCII string "123456789".
        assert_eq!(crc32(b"123456789").value(), 0xCBF43926);
    }

    #[test]
    fn decimal_roundtrip() {
        let c = crc32(b"hello");
        let dec = c.to_decimal();
        let parsed = Crc32::from_decimal(&dec).unwrap();
        assert_eq!(c, parsed);
    }

    #[test]
    fn decimal_is_not_hex() {
        // 0xCBF43926 decimal is 3421780262, not a hex-looking string.
        let c = Crc32::from_u32(0xCBF43926);
        assert_eq!(c.to_decimal(), "3421780262");
    }

    #[test]
    fn zero_pads_small_values() {
        let c = Crc32::from_u32(7);
        assert_eq!(c.to_decimal(), "0007");
        assert_eq!(c.fanout_prefix(), "00");
        assert_eq!(c.fanout_tail(), "07");
    }

    #[test]
    fn rejects_non_decimal() {
        assert!(Crc32::from_decimal("zzzz").is_err());
    }

    #[test]
    fn deterministic() {
        assert_eq!(crc32(b"same bytes"), crc32(b"same bytes"));
    }
}
