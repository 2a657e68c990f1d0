use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lit_config::Config;

use crate::commands::open_repo;
use crate::Cli;

#[derive(Args)]
pub struct CommitArgs {
    /// The commit message
    #[arg(short = 'm', long = "message", visible_alias = "m")]
    pub message: String,

    /// Tag the new commit with this name immediately
    #[arg(long = "tag")]
    pub tag: Option<String>,
}

pub fn run(args: &CommitArgs, cli: &Cli, root: &PathBuf) -> Result<i32> {
    let mut repo = open_repo(root)?;
    let commit = lit_repo::commit(&mut repo, root, &args.message).context("commit failed")?;

    if Config::read(root).debug {
        eprintln!("debug: wrote commit {}", commit.sha1);
        for diff in &commit.changes {
            eprintln!("debug: wrote diff {} ({:?} {})", diff.crc, diff.kind, diff.new_path);
        }
    }
    if let Some(name) = &args.tag {
        lit_repo::add_tag(&repo, root, commit.sha1, name)
            .with_context(|| format!("commit succeeded but tagging as '{name}' failed"))?;
    }

    if !cli.quiet {
        println!(
            "[{} {}] {}",
            repo.active_branch().name,
            &commit.sha1.to_hex()[..10],
            commit.message
        );
        println!(
            " {} file(s)/folder(s) changed",
            commit.changes.len()
        );
        if let Some(name) = &args.tag {
            println!(" tagged as '{name}'");
        }
    }
    Ok(0)
}
