use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lit_repo::Recurse;
use lit_utils::{walk, WalkMode};

use crate::commands::open_repo;
use crate::Cli;

#[derive(Args)]
pub struct AddArgs {
    /// Paths to stage
    pub paths: Vec<PathBuf>,

    /// Stage every file and folder in the working tree
    #[arg(long)]
    pub all: bool,

    /// Do not descend into a staged folder's contents
    #[arg(long = "no-recurse")]
    pub no_recurse: bool,
}

pub fn run(args: &AddArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let repo = open_repo(root)?;
    let recurse = if args.no_recurse { Recurse::No } else { Recurse::Yes };

    let mut staged = 0;
    if args.all {
        for inode in walk(root, WalkMode::NoRecurse)? {
            if inode.name == ".lit" {
                continue;
            }
            lit_repo::shelve_add(&repo, root, &inode.path, recurse)
                .with_context(|| format!("failed to add '{}'", inode.path.display()))?;
            staged += 1;
        }
    } else {
        for path in &args.paths {
            lit_repo::shelve_add(&repo, root, path, recurse)
                .with_context(|| format!("failed to add '{}'", path.display()))?;
            staged += 1;
        }
    }

    if !cli.quiet {
        println!("staged {staged} path(s)");
    }
    Ok(0)
}
