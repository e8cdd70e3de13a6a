//! Operations module
//!
//! Alias management, the run path, and the terminal/shell adapters they use

pub mod aliases;
pub mod commands;
pub mod prompt;
pub mod run;

pub use aliases::*;
pub use commands::*;
pub use prompt::*;
pub use run::*;
