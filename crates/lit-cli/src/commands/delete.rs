use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lit_repo::Recurse;

use crate::commands::open_repo;
use crate::Cli;

#[derive(Args)]
pub struct DeleteArgs {
    /// Paths to stage for removal
    pub paths: Vec<PathBuf>,

    /// Do not descend into a staged folder's contents
    #[arg(long = "no-recurse")]
    pub no_recurse: bool,
}

pub fn run(args: &DeleteArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let repo = open_repo(root)?;
    let recurse = if args.no_recurse { Recurse::No } else { Recurse::Yes };

    for path in &args.paths {
        lit_repo::shelve_delete(&repo, root, path, recurse)
            .with_context(|| format!("failed to stage deletion of '{}'", path.display()))?;
    }

    if !cli.quiet {
        println!("staged {} path(s) for removal", args.paths.len());
    }
    Ok(0)
}
