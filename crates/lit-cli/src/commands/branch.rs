//! `add-branch` / `switch-branch` / `delete-branch`, grouped in one module
//! the way the teacher's own `branch` subcommand groups create, delete,
//! rename, and list under a single dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::open_repo;
use crate::Cli;

#[derive(Args)]
pub struct AddBranchArgs {
    /// Name of the new branch
    pub name: String,

    /// Branch to copy history from; defaults to the active branch
    #[arg(long)]
    pub from: Option<String>,
}

pub fn run_add(args: &AddBranchArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let mut repo = open_repo(root)?;
    let source = args
        .from
        .clone()
        .unwrap_or_else(|| repo.active_branch().name.clone());

    lit_repo::create_branch(&mut repo, root, &args.name, &source)
        .with_context(|| format!("failed to create branch '{}'", args.name))?;

    if !cli.quiet {
        println!("created branch '{}' from '{}'", args.name, source);
    }
    Ok(0)
}

#[derive(Args)]
pub struct SwitchBranchArgs {
    /// Branch to switch to
    pub name: String,

    /// Acknowledge that switching may reset the working tree wholesale if
    /// no common ancestor is found; has no effect beyond suppressing a
    /// future interactive confirmation prompt, since the reset itself
    /// already happens unconditionally
    #[arg(long)]
    pub hard: bool,
}

pub fn run_switch(args: &SwitchBranchArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let mut repo = open_repo(root)?;
    let _ = args.hard;
    lit_repo::switch_branch(&mut repo, root, &args.name)
        .with_context(|| format!("failed to switch to branch '{}'", args.name))?;

    if !cli.quiet {
        println!("switched to branch '{}'", args.name);
    }
    Ok(0)
}

#[derive(Args)]
pub struct DeleteBranchArgs {
    /// Branch to delete
    pub name: String,
}

pub fn run_delete(args: &DeleteBranchArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let mut repo = open_repo(root)?;
    lit_repo::delete_branch(&mut repo, root, &args.name)
        .with_context(|| format!("failed to delete branch '{}'", args.name))?;

    if !cli.quiet {
        println!("deleted branch '{}'", args.name);
    }
    Ok(0)
}
