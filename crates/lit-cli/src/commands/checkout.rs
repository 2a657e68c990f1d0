use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lit_hash::Sha1;

use crate::commands::open_repo;
use crate::Cli;

#[derive(Args)]
pub struct CheckoutArgs {
    /// The commit to check out, as a 40-character sha1 hex string. Omit to
    /// check out the active branch's head, the recovery path out of
    /// read-only mode.
    pub sha1: Option<String>,
}

pub fn run(args: &CheckoutArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let mut repo = open_repo(root)?;

    match &args.sha1 {
        Some(hex) => {
            let target = Sha1::from_hex(hex).context("not a valid sha1")?;
            lit_repo::checkout(&mut repo, root, target).context("checkout failed")?;
            if !cli.quiet {
                println!("checked out {}", &hex[..10]);
            }
        }
        None => {
            lit_repo::checkout_to_head(&mut repo, root).context("checkout to head failed")?;
            if !cli.quiet {
                println!("checked out head of '{}'", repo.active_branch().name);
            }
        }
    }
    Ok(0)
}
