//! Alias management: add, list, update, delete

use crate::error::PoyoError;
use crate::store::{Alias, AliasStore};
use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::info;

/// Store a new alias
///
/// # Errors
///
/// Returns `AliasAlreadyExists` if the key is taken; the stored alias is left as is
#[inline]
pub fn add_alias(store: &mut dyn AliasStore, key: &str, command: &str) -> Result<Alias> {
    let alias = store.add(key, command)?;
    info!("Added: '{}' \u{2192} '{}'", alias.key, alias.command);
    Ok(alias)
}

/// Replace the command of an existing alias
///
/// # Errors
///
/// Returns `AliasNotFound`, pointing at `poyo add`, if no alias has this key
#[inline]
pub fn update_alias(store: &mut dyn AliasStore, key: &str, command: &str) -> Result<Alias> {
    let alias = match store.update(key, command) {
        Ok(alias) => alias,
        Err(err)
            if matches!(
                err.downcast_ref::<PoyoError>(),
                Some(PoyoError::AliasNotFound { .. })
            ) =>
        {
            return Err(
                PoyoError::not_found_with_hint(key, "Use 'poyo add' to create one.").into(),
            );
        }
        Err(err) => return Err(err),
    };
    info!("Updated '{}' \u{2192} '{}'", alias.key, alias.command);
    Ok(alias)
}

/// Remove an alias
///
/// # Errors
///
/// Returns `AliasNotFound` if no alias has this key
#[inline]
pub fn delete_alias(store: &mut dyn AliasStore, key: &str) -> Result<Alias> {
    let alias = store.delete(key)?;
    info!("Deleted '{}'", alias.key);
    Ok(alias)
}

/// Print every alias in store order, returning how many were printed
///
/// # Errors
///
/// Returns an error if the store cannot be read or the output cannot be written
#[inline]
pub fn list_aliases(store: &dyn AliasStore, out: &mut dyn Write) -> Result<usize> {
    let aliases = store.list()?;

    if aliases.is_empty() {
        writeln!(out, "No saved commands yet.").context("Failed to write alias list")?;
        return Ok(0);
    }

    writeln!(out, "Saved Commands:").context("Failed to write alias list")?;
    for alias in &aliases {
        writeln!(out, "  {} \u{2192} {}", alias.key, alias.command)
            .context("Failed to write alias list")?;
    }

    Ok(aliases.len())
}
