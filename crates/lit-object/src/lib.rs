//! The commit and branch object model for `lit`.
//!
//! A [`Commit`] owns an ordered sequence of [`lit_diff::Diff`]; a [`Branch`]
//! owns an ordered sequence of `Commit`. Neither type knows where it lives
//! on disk — fan-out paths and file I/O belong to the object store crate
//! built on top of this one, the same way `gitr`'s `git-object` parses
//! blob/tree/commit bytes without knowing how `git-odb` found them.

mod branch;
mod commit;
mod error;
mod tag;

pub use branch::{Branch, BranchHeader};
pub use commit::{Commit, CommitHeader};
pub use error::ObjectError;
pub use tag::Tag;
