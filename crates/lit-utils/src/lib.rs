//! Inode walking and line I/O shared by the rest of the `lit` workspace.
//!
//! Everything here is filesystem plumbing with no knowledge of diffs,
//! commits, or branches — the same separation `gitr`'s `git-utils` draws
//! between path/IO primitives and the object model built on top of them.

mod error;
pub mod lines;
pub mod walk;

pub use error::UtilError;
pub use lines::{read_lines, write_lines};
pub use walk::{walk, Inode, InodeKind, WalkMode};

pub type Result<T> = std::result::Result<T, UtilError>;
