//! Alias persistence
//!
//! A store maps a unique key to a command template. Handles are opened once
//! per invocation and passed explicitly to every operation.

pub mod yaml;

pub use yaml::YamlAliasStore;

use crate::error::PoyoError;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A stored key → command template pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Alias {
    /// Internal identifier, assigned on insert and never reused
    pub id: u64,

    /// Shortcut key, unique within the store
    pub key: String,

    /// Command template, possibly containing placeholders
    pub command: String,
}

/// CRUD access to stored aliases
///
/// `list` returns aliases in insertion order; `update` keeps an alias in place.
pub trait AliasStore {
    /// Look up an alias by key
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    fn get(&self, key: &str) -> Result<Option<Alias>>;

    /// Insert a new alias
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key or command is empty (`InvalidAlias`)
    /// - The key is already taken (`AliasAlreadyExists`)
    /// - The store cannot be written
    fn add(&mut self, key: &str, command: &str) -> Result<Alias>;

    /// Replace the command of an existing alias
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command is empty (`InvalidAlias`)
    /// - No alias has this key (`AliasNotFound`)
    /// - The store cannot be written
    fn update(&mut self, key: &str, command: &str) -> Result<Alias>;

    /// Remove an alias, returning what was stored
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No alias has this key (`AliasNotFound`)
    /// - The store cannot be written
    fn delete(&mut self, key: &str) -> Result<Alias>;

    /// All aliases in store order
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    fn list(&self) -> Result<Vec<Alias>>;
}

/// Reject empty keys and commands
///
/// # Errors
///
/// Returns `InvalidAlias` naming the empty field
#[inline]
pub fn validate_alias(key: &str, command: &str) -> Result<(), PoyoError> {
    if key.trim().is_empty() {
        return Err(PoyoError::invalid_alias("key must not be empty"));
    }
    if command.trim().is_empty() {
        return Err(PoyoError::invalid_alias(format!(
            "command for '{key}' must not be empty"
        )));
    }
    Ok(())
}
