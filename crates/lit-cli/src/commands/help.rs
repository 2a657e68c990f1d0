use anyhow::Result;

use clap::CommandFactory;

use crate::Cli;

pub fn run() -> Result<i32> {
    Cli::command().print_long_help()?;
    println!();
    Ok(0)
}
