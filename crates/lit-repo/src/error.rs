use std::path::PathBuf;

use lit_hash::Sha1;

/// Errors from repository-level operations: init, the change-set engine,
/// history operations, rebase, tags, shelving, and the cache scavenger —
/// `spec.md` §7.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("'.lit' directory already exists at '{0}'")]
    AlreadyExists(PathBuf),

    #[error("'.lit/index' missing at '{0}'; not a lit repository")]
    IndexMissing(PathBuf),

    #[error("branch '{0}' already exists")]
    BranchAlreadyExists(String),

    #[error("branch '{0}' does not exist")]
    BranchNotFound(String),

    #[error("cannot delete the 'origin' branch")]
    CannotDeleteOrigin,

    #[error("repository is read-only; checkout to the head of the active branch first")]
    ReadOnly,

    #[error("rollback target is not older than the active branch's head")]
    RollbackNotOlder,

    #[error("checkout target is not newer than the active branch's head")]
    CheckoutNotNewer,

    #[error("commit '{0}' is not on the active branch")]
    CommitNotOnBranch(Sha1),

    #[error("no common ancestor between '{0}' and '{1}'")]
    NoCommonAncestor(String, String),

    #[error("nothing shelved; nothing to commit")]
    NothingShelved,

    #[error("tag '{0}' already exists")]
    TagAlreadyExists(String),

    #[error("tag '{0}' not found")]
    TagNotFound(String),

    #[error(transparent)]
    Store(#[from] lit_store::StoreError),

    #[error(transparent)]
    Ref(#[from] lit_ref::RefError),

    #[error(transparent)]
    Object(#[from] lit_object::ObjectError),

    #[error(transparent)]
    Diff(#[from] lit_diff::DiffError),

    #[error(transparent)]
    Hash(#[from] lit_hash::HashError),

    #[error(transparent)]
    Util(#[from] lit_utils::UtilError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
