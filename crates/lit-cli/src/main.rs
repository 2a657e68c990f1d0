mod commands;

use std::process;

use clap::Parser;

use commands::Commands;

#[derive(Parser)]
#[command(
    name = "lit",
    about = "A content-addressable, branch-oriented version control system",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Suppress informational output
    #[arg(long, global = true)]
    pub(crate) quiet: bool,

    /// Print extra detail about each operation
    #[arg(long, global = true)]
    pub(crate) verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    match commands::run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("fatal: {e}");
            process::exit(1);
        }
    }
}
