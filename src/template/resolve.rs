//! Placeholder value resolution
//!
//! Explicit `name=value` arguments win; anything still missing is asked for
//! through a [`Prompter`], one name at a time.

use anyhow::{Context as _, Result};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::io;
use tracing::debug;

/// Source of values for placeholders the caller did not supply
pub trait Prompter {
    /// Ask for the value of a single placeholder
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails or is closed.
    fn prompt(&mut self, name: &str) -> io::Result<String>;
}

impl<F> Prompter for F
where
    F: FnMut(&str) -> io::Result<String>,
{
    #[inline]
    fn prompt(&mut self, name: &str) -> io::Result<String> {
        self(name)
    }
}

/// Placeholder values for one run, in placeholder order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedValues {
    values: IndexMap<String, String>,
}

impl ResolvedValues {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one for the same name
    #[inline]
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.values.insert(name.into(), value.into());
    }

    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResolvedValues {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

/// Build explicit placeholder values from `name=value` tokens
///
/// Each token is split on its first `=`, so values may contain `=` themselves.
/// Tokens without `=` are not assignments and are skipped. A repeated name
/// keeps the last value.
#[inline]
pub fn parse_assignments<I, S>(tokens: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut explicit = HashMap::new();
    for token in tokens {
        let token = token.as_ref();
        match token.split_once('=') {
            Some((name, value)) => {
                explicit.insert(name.to_owned(), value.to_owned());
            }
            None => debug!("Ignoring argument without '=': {token}"),
        }
    }
    explicit
}

/// Resolve a value for every placeholder name
///
/// Names found in `explicit` are taken from there and never prompted for.
/// Every other name is prompted exactly once, in order. Empty answers are
/// valid values.
///
/// # Errors
///
/// Returns an error only if the prompter itself fails.
#[inline]
pub fn resolve<P>(
    names: &[String],
    explicit: &HashMap<String, String>,
    prompter: &mut P,
) -> Result<ResolvedValues>
where
    P: Prompter + ?Sized,
{
    let mut resolved = ResolvedValues::new();

    for name in names {
        if let Some(value) = explicit.get(name) {
            debug!("Placeholder '{name}' supplied on the command line");
            resolved.insert(name.as_str(), value.as_str());
            continue;
        }

        let value = prompter
            .prompt(name)
            .with_context(|| format!("Failed to read a value for placeholder '{name}'"))?;
        resolved.insert(name.as_str(), value);
    }

    Ok(resolved)
}
