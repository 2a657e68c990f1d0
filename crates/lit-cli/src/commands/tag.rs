use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lit_hash::Sha1;

use crate::commands::open_repo;
use crate::Cli;

#[derive(Args)]
pub struct AddTagArgs {
    /// Commit to tag, as a 40-character sha1 hex string
    pub sha1: String,

    /// Name of the new tag
    pub name: String,
}

pub fn run_add(args: &AddTagArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let repo = open_repo(root)?;
    let commit = Sha1::from_hex(&args.sha1).context("not a valid sha1")?;
    lit_repo::add_tag(&repo, root, commit, &args.name)
        .with_context(|| format!("failed to create tag '{}'", args.name))?;

    if !cli.quiet {
        println!("tagged {} as '{}'", &args.sha1[..10], args.name);
    }
    Ok(0)
}

#[derive(Args)]
pub struct DeleteTagArgs {
    /// Tag to remove
    pub name: String,
}

pub fn run_delete(args: &DeleteTagArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    lit_repo::delete_tag(root, &args.name)
        .with_context(|| format!("failed to delete tag '{}'", args.name))?;

    if !cli.quiet {
        println!("deleted tag '{}'", args.name);
    }
    Ok(0)
}
