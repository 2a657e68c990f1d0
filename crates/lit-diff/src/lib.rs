//! The six diff variants, LCS line diffing, and diff serialisation for `lit`.
//!
//! A [`Diff`] is the atomic unit of change `lit` records: one file or folder
//! entering, leaving, or being rewritten between two points in time. This
//! crate only knows about bytes on disk and in memory — it has no notion of
//! a commit, a branch, or the object store's fan-out layout.

mod diff;
mod error;
mod kind;
mod lcs;

pub use diff::Diff;
pub use error::DiffError;
pub use kind::DiffKind;
pub use lcs::{forward_materialise, inverse_materialise, lcs_annotate};
