mod add;
mod branch;
mod cache;
mod checkout;
mod commit;
mod delete;
mod help;
mod log;
mod rebase;
mod rollback;
mod tag;
mod version;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;

use lit_repo::Repository;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new lit repository in the current directory
    #[command(visible_alias = "-i")]
    Init,
    /// Drain the shelving area into a new commit on the active branch
    #[command(visible_alias = "-c")]
    Commit(commit::CommitArgs),
    /// Move the active branch's head backward to an older commit
    #[command(visible_alias = "-r")]
    Rollback(rollback::RollbackArgs),
    /// Move the active branch's head forward to a newer commit
    #[command(visible_alias = "-C")]
    Checkout(checkout::CheckoutArgs),
    /// Show the active branch's commit history
    #[command(visible_alias = "-l")]
    Log(log::LogArgs),
    /// Stage a file or folder for the next commit
    #[command(visible_alias = "-a")]
    Add(add::AddArgs),
    /// Stage removal of a file or folder
    #[command(visible_alias = "-d")]
    Delete(delete::DeleteArgs),
    /// Create a new branch from an existing one
    #[command(visible_alias = "-aB")]
    AddBranch(branch::AddBranchArgs),
    /// Switch the active branch
    #[command(visible_alias = "-sB")]
    SwitchBranch(branch::SwitchBranchArgs),
    /// Delete a branch
    #[command(visible_alias = "-dB")]
    DeleteBranch(branch::DeleteBranchArgs),
    /// Replay one branch's new commits onto another
    #[command(visible_alias = "-rB")]
    RebaseBranch(rebase::RebaseBranchArgs),
    /// Remove objects no branch references any more
    #[command(visible_alias = "-cc")]
    ClearCache,
    /// Tag a commit on the active branch
    #[command(visible_alias = "-aT")]
    AddTag(tag::AddTagArgs),
    /// Remove a tag
    #[command(visible_alias = "-dT")]
    DeleteTag(tag::DeleteTagArgs),
    /// Print usage information
    #[command(visible_alias = "-h")]
    Help,
    /// Print version information
    #[command(visible_alias = "-v")]
    Version,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init => "init",
            Commands::Commit(_) => "commit",
            Commands::Rollback(_) => "rollback",
            Commands::Checkout(_) => "checkout",
            Commands::Log(_) => "log",
            Commands::Add(_) => "add",
            Commands::Delete(_) => "delete",
            Commands::AddBranch(_) => "add-branch",
            Commands::SwitchBranch(_) => "switch-branch",
            Commands::DeleteBranch(_) => "delete-branch",
            Commands::RebaseBranch(_) => "rebase-branch",
            Commands::ClearCache => "clear-cache",
            Commands::AddTag(_) => "add-tag",
            Commands::DeleteTag(_) => "delete-tag",
            Commands::Help => "help",
            Commands::Version => "version",
        }
    }
}

/// The working directory every command operates in — `lit` has no
/// equivalent of discovering a repository from a subdirectory the way git
/// walks up looking for `.git`; the root is always the current directory.
pub(crate) fn cwd() -> Result<PathBuf> {
    env::current_dir().context("failed to read the current directory")
}

/// Load the repository rooted at the current directory, failing with a
/// message pointing at `lit init` if none exists yet.
pub(crate) fn open_repo(root: &PathBuf) -> Result<Repository> {
    Repository::load(root).with_context(|| {
        format!(
            "'{}' is not a lit repository (or any parent, since lit doesn't search those); run 'lit init'",
            root.display()
        )
    })
}

pub fn run(cli: &Cli) -> Result<i32> {
    let root = cwd()?;
    if cli.verbose {
        eprintln!("lit: running '{}' in '{}'", cli.command.name(), root.display());
    }

    match &cli.command {
        Commands::Init => init_run(&root),
        Commands::Commit(args) => commit::run(args, cli, &root),
        Commands::Rollback(args) => rollback::run(args, cli, &root),
        Commands::Checkout(args) => checkout::run(args, cli, &root),
        Commands::Log(args) => log::run(args, cli, &root),
        Commands::Add(args) => add::run(args, cli, &root),
        Commands::Delete(args) => delete::run(args, cli, &root),
        Commands::AddBranch(args) => branch::run_add(args, cli, &root),
        Commands::SwitchBranch(args) => branch::run_switch(args, cli, &root),
        Commands::DeleteBranch(args) => branch::run_delete(args, cli, &root),
        Commands::RebaseBranch(args) => rebase::run(args, cli, &root),
        Commands::ClearCache => cache::run(cli, &root),
        Commands::AddTag(args) => tag::run_add(args, cli, &root),
        Commands::DeleteTag(args) => tag::run_delete(args, cli, &root),
        Commands::Help => help::run(),
        Commands::Version => version::run(),
    }
}

fn init_run(root: &PathBuf) -> Result<i32> {
    Repository::init(root).context("failed to initialise lit repository")?;
    println!("initialised empty lit repository in '{}'", root.display());
    Ok(0)
}
