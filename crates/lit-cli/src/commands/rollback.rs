use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lit_hash::Sha1;

use crate::commands::open_repo;
use crate::Cli;

#[derive(Args)]
pub struct RollbackArgs {
    /// The commit to roll back to, as a 40-character sha1 hex string
    pub sha1: String,
}

pub fn run(args: &RollbackArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let target = Sha1::from_hex(&args.sha1).context("not a valid sha1")?;
    let mut repo = open_repo(root)?;
    lit_repo::rollback(&mut repo, root, target).context("rollback failed")?;

    if !cli.quiet {
        println!(
            "rolled back to {} (repository is now read-only; checkout to head to resume writing)",
            &args.sha1[..10]
        );
    }
    Ok(0)
}
