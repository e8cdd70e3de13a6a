//! Shell command execution

use crate::error::PoyoError;
use anyhow::Result;
use std::process::Command;
use tracing::debug;

/// Executes a final command string
///
/// The string is handed to the shell untouched. Whoever stores an alias is
/// trusted with whatever it expands to.
pub trait CommandRunner {
    /// Run the command to completion, returning its exit code
    ///
    /// `None` means the process ended without a code (killed by a signal).
    ///
    /// # Errors
    ///
    /// Returns a `Command` error if the shell cannot be spawned
    fn run(&self, command: &str) -> Result<Option<i32>>;
}

/// Runs commands through the platform shell with inherited stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<Option<i32>> {
        let (shell, shell_args) = get_shell_command();
        debug!("Spawning {shell} {shell_args:?} {command:?}");

        let status = Command::new(shell)
            .args(shell_args)
            .arg(command)
            .status()
            .map_err(|err| PoyoError::command(format!("Failed to execute '{command}': {err}")))?;

        Ok(status.code())
    }
}

/// Get the appropriate shell command for the current platform
const fn get_shell_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "windows") {
        ("cmd", &["/C"])
    } else {
        ("sh", &["-c"])
    }
}
