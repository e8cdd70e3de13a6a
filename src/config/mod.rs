//! Configuration management module
//!
//! Resolves where the alias store lives. Precedence: `--store` flag, then the
//! `POYO_STORE` environment variable, then `~/.poyo.yaml`. The CLI already
//! folds `POYO_STORE` into `--store`; the variable is read again here for
//! library callers that pass no override.

use crate::error::PoyoError;
use crate::system::System;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the store location
pub const STORE_ENV_VAR: &str = "POYO_STORE";

/// Store file name inside the home directory
pub const DEFAULT_STORE_FILE: &str = ".poyo.yaml";

/// Settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
    /// Path of the alias store file
    pub store_path: PathBuf,
}

impl Config {
    /// Resolve the configuration for this invocation
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if no override is given and the home
    /// directory cannot be determined
    #[inline]
    pub fn resolve(system: &dyn System, store_override: Option<&str>) -> Result<Self> {
        let home = system.home_dir();

        let store_path = if let Some(path) = store_override.filter(|path| !path.is_empty()) {
            debug!("Using store from --store: {path}");
            expand_home(path, home.as_deref())
        } else if let Ok(path) = system.env_var(STORE_ENV_VAR)
            && !path.is_empty()
        {
            debug!("Using store from {STORE_ENV_VAR}: {path}");
            expand_home(&path, home.as_deref())
        } else {
            let home = home.ok_or_else(|| {
                PoyoError::configuration(format!(
                    "Could not determine the home directory. Set {STORE_ENV_VAR} or pass --store"
                ))
            })?;
            home.join(DEFAULT_STORE_FILE)
        };

        Ok(Self { store_path })
    }
}

/// Replace a leading `~` with the home directory
fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_path_buf(),
        (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with('\\') => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(path),
    }
}
