//! Named references for `lit`: the repository index, branch refs, and tag
//! refs. Built on [`lit_store`] for the underlying commit/diff objects, the
//! way `gitr`'s `git-ref` sits on top of `git-loose`.

mod branch_ref;
mod error;
mod index;
mod tag_ref;

pub use branch_ref::{branch_exists, delete_branch, read_branch, write_branch};
pub use error::RefError;
pub use index::RepoIndex;
pub use tag_ref::{delete_tag, filter_tags, read_tags, tag_exists, write_tag};
