//! `Poyo` - A CLI shortcut manager
//!
//! Short keys map to shell command templates with named placeholders.
//! Running a key fills the placeholders from `name=value` arguments, asks
//! for any that are missing, and hands the expanded command to the shell.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod store;
pub mod system;
pub mod template;

use anyhow::Result;
use cli::{Args, Commands};
use config::Config;
use operations::{
    CommandRunner, ShellRunner, TerminalPrompter, add_alias, delete_alias, list_aliases,
    run_alias, update_alias,
};
use std::io::{self, Write};
use store::YamlAliasStore;
use system::{RealSystem, System};
use template::Prompter;

/// Main entry point for the poyo library
///
/// # Errors
///
/// Returns an error if the subcommand fails; see [`execute`]
pub fn run(args: &Args, subcommand: &Commands) -> Result<()> {
    let system = RealSystem::new();
    let mut prompter = TerminalPrompter::stdio();
    let runner = ShellRunner::new();
    let mut stdout = io::stdout();
    execute(
        &system,
        args.store.as_deref(),
        subcommand,
        &mut prompter,
        &runner,
        &mut stdout,
    )
}

/// Execute one subcommand against the store for this invocation
///
/// The store is opened here and dropped when the subcommand finishes.
///
/// # Errors
///
/// Returns an error if:
/// - The store location cannot be resolved or the store cannot be opened
/// - The subcommand itself fails (`AliasNotFound`, `AliasAlreadyExists`, ...)
pub fn execute(
    system: &dyn System,
    store_override: Option<&str>,
    subcommand: &Commands,
    prompter: &mut dyn Prompter,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<()> {
    let config = Config::resolve(system, store_override)?;
    let mut store = YamlAliasStore::open(system, &config.store_path)?;

    match subcommand {
        Commands::Add { key, cmd } => {
            add_alias(&mut store, key, cmd)?;
        }
        Commands::Run { key, extra_args } => {
            run_alias(&store, key, extra_args, prompter, runner)?;
        }
        Commands::List => {
            list_aliases(&store, out)?;
        }
        Commands::Update { key, cmd } => {
            update_alias(&mut store, key, cmd)?;
        }
        Commands::Delete { key } => {
            delete_alias(&mut store, key)?;
        }
    }

    Ok(())
}
