use clap::{Parser, Subcommand};

/// Command-line arguments for poyo
#[derive(Parser, Debug, Clone)]
#[command(name = "poyo")]
#[command(about = "Poyo - A CLI shortcut manager")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Alias store file (defaults to ~/.poyo.yaml)
    #[arg(long, value_name = "PATH", env = "POYO_STORE", global = true)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub subcommand: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a new command alias
    Add {
        /// Shortcut key
        key: String,

        /// Actual command to execute
        #[arg(value_name = "COMMAND")]
        cmd: String,
    },

    /// Run a saved command
    Run {
        /// Shortcut key to run
        key: String,

        /// Placeholder values (e.g., name=John)
        #[arg(value_name = "NAME=VALUE", trailing_var_arg = true, allow_hyphen_values = true)]
        extra_args: Vec<String>,
    },

    /// List all saved command aliases
    List,

    /// Update an existing command
    Update {
        /// Shortcut key to update
        key: String,

        /// New command to replace the old one
        #[arg(value_name = "COMMAND")]
        cmd: String,
    },

    /// Delete a command alias
    Delete {
        /// Shortcut key to delete
        key: String,
    },
}
