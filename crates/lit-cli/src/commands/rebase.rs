use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lit_repo::RebaseOutcome;

use crate::commands::open_repo;
use crate::Cli;

#[derive(Args)]
pub struct RebaseBranchArgs {
    /// Branch receiving the replayed commits
    pub destination: String,

    /// Branch whose commits past the common ancestor are replayed
    pub source: String,
}

pub fn run(args: &RebaseBranchArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let mut repo = open_repo(root)?;
    let outcome = lit_repo::rebase(&mut repo, root, &args.destination, &args.source)
        .context("rebase failed")?;

    match outcome {
        RebaseOutcome::Success { appended } => {
            if !cli.quiet {
                println!(
                    "rebased '{}' onto '{}': {appended} commit(s) appended",
                    args.source, args.destination
                );
            }
            Ok(0)
        }
        RebaseOutcome::Conflict { pairs } => {
            eprintln!(
                "rebase aborted: {} conflicting path(s) between '{}' and '{}'",
                pairs.len(),
                args.source,
                args.destination
            );
            for pair in &pairs {
                eprintln!(
                    "  {} ({}/@{} vs {}/@{})",
                    pair.path,
                    pair.source_commit,
                    pair.source_diff_crc,
                    pair.destination_commit,
                    pair.destination_diff_crc
                );
            }
            Ok(1)
        }
    }
}
