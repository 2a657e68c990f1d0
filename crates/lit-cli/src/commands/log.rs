use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::commands::open_repo;
use crate::Cli;

#[derive(Args)]
pub struct LogArgs {
    /// Draw an ASCII graph marking the active branch's current head
    #[arg(long)]
    pub graph: bool,

    /// Only show commits whose message contains this substring
    #[arg(long)]
    pub filter: Option<String>,

    /// Limit the number of commits shown
    #[arg(long = "max-count")]
    pub max_count: Option<usize>,

    /// Print every diff's path and line count alongside each commit
    #[arg(long)]
    pub verbose: bool,
}

pub fn run(args: &LogArgs, _cli: &Cli, root: &PathBuf) -> Result<i32> {
    let repo = open_repo(root)?;
    let branch = repo.active_branch();

    let shelved = lit_store::read_shelved_diffs(root, &branch.name)?;
    println!(
        "current branch: '{}', {} change(s) shelved, with {} commit(s)",
        branch.name,
        shelved.len(),
        branch.commits.len()
    );

    let mut shown = 0;
    for (i, commit) in branch.commits.iter().enumerate().rev() {
        if let Some(needle) = &args.filter {
            if !commit.message.contains(needle.as_str()) {
                continue;
            }
        }
        if let Some(max) = args.max_count {
            if shown >= max {
                break;
            }
        }
        shown += 1;

        let marker = if args.graph {
            if i == branch.head { "* (HEAD) " } else { "* " }
        } else {
            ""
        };
        println!("{marker}commit {}", commit.sha1);
        println!("Date:    {}", commit.timestamp);
        println!("    {}", commit.message);
        if args.verbose {
            for diff in &commit.changes {
                println!("      {:?} {} ({} line(s))", diff.kind, diff.new_path, diff.lines.len());
            }
        }
        println!();
    }
    Ok(0)
}
