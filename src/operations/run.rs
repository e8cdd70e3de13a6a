//! The run path: look up, resolve placeholders, expand, execute

use crate::error::PoyoError;
use crate::operations::commands::CommandRunner;
use crate::store::AliasStore;
use crate::template::{Prompter, Template, parse_assignments, resolve};
use anyhow::Result;
use tracing::{debug, info, warn};

/// What a run dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RunReport {
    /// Fully expanded command handed to the runner
    pub command: String,

    /// Exit code reported by the runner (`None` if killed by a signal)
    pub exit_code: Option<i32>,
}

impl RunReport {
    /// Whether the command itself exited with status 0
    #[must_use]
    #[inline]
    pub const fn succeeded(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Run a stored alias
///
/// `args` are the extra tokens after the key; `name=value` tokens fill
/// placeholders, everything else is ignored. Placeholders left over are asked
/// for through `prompter`. A non-zero exit of the command is logged but does
/// not fail the run.
///
/// # Errors
///
/// Returns an error if:
/// - No alias has this key (`AliasNotFound`), before any prompting
/// - The stored template is malformed (`MalformedTemplate`), before any prompting
/// - Prompting fails
/// - The command cannot be spawned
#[inline]
pub fn run_alias(
    store: &dyn AliasStore,
    key: &str,
    args: &[String],
    prompter: &mut dyn Prompter,
    runner: &dyn CommandRunner,
) -> Result<RunReport> {
    let alias = store.get(key)?.ok_or_else(|| PoyoError::not_found(key))?;

    let template = Template::parse(&alias.command)?;
    let names: Vec<String> = template
        .placeholders()
        .into_iter()
        .map(str::to_owned)
        .collect();
    debug!("Alias '{key}' placeholders: {names:?}");

    let explicit = parse_assignments(args);
    let values = resolve(&names, &explicit, prompter)?;
    let command = template.render(&values)?;

    info!("Running: {command}");
    let exit_code = runner.run(&command)?;

    match exit_code {
        Some(0) => debug!("Command finished successfully"),
        Some(code) => warn!("Command exited with status {code}"),
        None => warn!("Command terminated by a signal"),
    }

    Ok(RunReport { command, exit_code })
}
