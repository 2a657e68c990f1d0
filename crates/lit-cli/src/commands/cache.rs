use std::path::PathBuf;

use anyhow::{Context, Result};
use lit_config::Config;

use crate::commands::open_repo;
use crate::Cli;

pub fn run(cli: &Cli, root: &PathBuf) -> Result<i32> {
    let repo = open_repo(root)?;
    let removed = lit_repo::clear_cache(&repo, root).context("cache scavenger failed")?;

    if Config::read(root).debug {
        for path in &removed {
            eprintln!("debug: swept '{}'", path.display());
        }
    }
    if !cli.quiet {
        println!("removed {} unreferenced object(s)", removed.len());
    }
    Ok(0)
}
