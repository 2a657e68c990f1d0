//! The change-set engine, history operations, and repository lifecycle for
//! `lit` — `spec.md` §4, §7. Builds on `lit-object` (the data model),
//! `lit-store` (content-addressed persistence), and `lit-ref` (branch and
//! tag indices) the way `gitr`'s `git-repository` builds on `git-object`
//! and `git-loose`.

mod apply;
mod branch;
mod cache;
mod error;
mod history;
mod rebase;
mod repository;
mod shelve;
mod tag;

pub use apply::{forward_apply_commit, forward_apply_diff, inverse_apply_commit, inverse_apply_diff};
pub use branch::{common_ancestor, create_branch, delete_branch, switch_branch};
pub use cache::clear_cache;
pub use error::RepoError;
pub use history::{checkout, checkout_to_head, rollback};
pub use rebase::{rebase, ConflictPair, RebaseOutcome};
pub use repository::{Repository, ORIGIN};
pub use shelve::{commit, shelve_add, shelve_delete, Recurse};
pub use tag::{add_tag, delete_tag};
