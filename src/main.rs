//! # `Poyo`
//!
//! A command-line shortcut manager. Save a command under a short key, with
//! `{placeholders}` for the parts that change, then run it by key.
//!
//! ## Usage
//!
//! ```sh
//! poyo add greet "echo hello {name}"
//! poyo run greet name=World      # echo hello World
//! poyo run greet                 # asks: Enter value for 'name':
//! poyo list
//! poyo update greet "echo hi {name}"
//! poyo delete greet
//! ```
//!
//! Aliases live in `~/.poyo.yaml` unless `--store` or `POYO_STORE` says otherwise.

use anyhow::Result;
use clap::{CommandFactory as _, Parser as _};
use poyo::cli::Args;
use poyo::error::PoyoError;
use std::io::{self, IsTerminal as _};
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_ansi(io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .with_level(args.verbose)
        .with_env_filter(filter)
        .init();

    // No subcommand: show usage and exit cleanly
    let Some(subcommand) = args.subcommand.as_ref() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    match poyo::run(&args, subcommand) {
        Ok(()) => std::process::exit(0),
        Err(err) => match err.downcast_ref::<PoyoError>() {
            Some(poyo_err) if poyo_err.is_notice() => {
                warn!("{}", err);
                std::process::exit(poyo_err.exit_code());
            }
            Some(poyo_err) => {
                error!("{:#}", err);
                std::process::exit(poyo_err.exit_code());
            }
            None => {
                error!("{:#}", err);
                std::process::exit(1);
            }
        },
    }
}
