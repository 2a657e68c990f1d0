//! Hashing for the lit version control system.
//!
//! `lit` identifies commits and branches with SHA-1 and fingerprints diffs
//! with CRC-32. Both are pure functions over a byte slice; neither streams,
//! since every caller already has the full buffer in memory (a diff's
//! serialised lines, a commit's header) before it needs a hash.

mod crc32;
mod error;
pub mod hex;
mod sha1;

pub use crc32::{crc32, Crc32};
pub use error::HashError;
pub use sha1::{sha1, Sha1};
