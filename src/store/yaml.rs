//! YAML file backed alias store

use super::{Alias, AliasStore, validate_alias};
use crate::error::PoyoError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk layout of the store file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    next_id: u64,

    #[serde(default)]
    aliases: Vec<Alias>,
}

/// Alias store persisted as a single YAML document
///
/// The file is read once when the store is opened and rewritten in full on
/// every mutation. A missing file is an empty store. Changes are applied to
/// the in-memory copy only once the rewrite succeeded.
pub struct YamlAliasStore<'sys> {
    system: &'sys dyn System,
    path: PathBuf,
    data: StoreFile,
}

impl std::fmt::Debug for YamlAliasStore<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YamlAliasStore")
            .field("path", &self.path)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<'sys> YamlAliasStore<'sys> {
    /// Open the store at `path`
    ///
    /// # Errors
    ///
    /// Returns a `Store` error if:
    /// - The file exists but cannot be read
    /// - The file is not a valid store document or holds duplicate keys
    #[inline]
    pub fn open<P: AsRef<Path>>(system: &'sys dyn System, path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = load(system, &path)?;
        debug!(
            "Opened alias store {} ({} aliases)",
            path.display(),
            data.aliases.len()
        );
        Ok(Self { system, path, data })
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.data.aliases.iter().position(|alias| alias.key == key)
    }

    /// Write `data` to disk and make it the current state
    fn commit(&mut self, data: StoreFile) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !self.system.exists(parent)?
        {
            self.system.create_dir_all(parent).map_err(|err| {
                PoyoError::store(format!(
                    "Failed to create directory {}: {err}",
                    parent.display()
                ))
            })?;
        }

        let content =
            serde_yaml::to_string(&data).context("Failed to serialize alias store")?;
        self.system
            .write(&self.path, content.as_bytes())
            .map_err(|err| {
                PoyoError::store(format!(
                    "Failed to write alias store {}: {err}",
                    self.path.display()
                ))
            })?;
        debug!("Saved alias store {}", self.path.display());
        self.data = data;
        Ok(())
    }
}

impl AliasStore for YamlAliasStore<'_> {
    fn get(&self, key: &str) -> Result<Option<Alias>> {
        Ok(self.position(key).map(|index| self.data.aliases[index].clone()))
    }

    fn add(&mut self, key: &str, command: &str) -> Result<Alias> {
        validate_alias(key, command)?;
        if self.position(key).is_some() {
            return Err(PoyoError::already_exists(key).into());
        }

        let mut data = self.data.clone();
        let alias = Alias {
            id: data.next_id,
            key: key.to_owned(),
            command: command.to_owned(),
        };
        data.next_id = alias
            .id
            .checked_add(1)
            .ok_or_else(|| PoyoError::store("Alias store has run out of ids"))?;
        data.aliases.push(alias.clone());
        self.commit(data)?;
        Ok(alias)
    }

    fn update(&mut self, key: &str, command: &str) -> Result<Alias> {
        validate_alias(key, command)?;
        let index = self
            .position(key)
            .ok_or_else(|| PoyoError::not_found(key))?;

        let mut data = self.data.clone();
        data.aliases[index].command = command.to_owned();
        let updated = data.aliases[index].clone();
        self.commit(data)?;
        Ok(updated)
    }

    fn delete(&mut self, key: &str) -> Result<Alias> {
        let index = self
            .position(key)
            .ok_or_else(|| PoyoError::not_found(key))?;

        let mut data = self.data.clone();
        let removed = data.aliases.remove(index);
        self.commit(data)?;
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<Alias>> {
        Ok(self.data.aliases.clone())
    }
}

/// Read and check the store file, treating a missing or blank file as empty
fn load(system: &dyn System, path: &Path) -> Result<StoreFile> {
    if !system.exists(path)? {
        return Ok(StoreFile::default());
    }

    let content = system.read_to_string(path).map_err(|err| {
        PoyoError::store(format!(
            "Failed to read alias store {}: {err}",
            path.display()
        ))
    })?;

    if content.trim().is_empty() {
        return Ok(StoreFile::default());
    }

    let mut data: StoreFile = serde_yaml::from_str(&content).map_err(|err| {
        PoyoError::store(format!(
            "Failed to parse alias store {}: {err}",
            path.display()
        ))
    })?;

    let mut seen = HashSet::new();
    for alias in &data.aliases {
        if !seen.insert(alias.key.as_str()) {
            return Err(PoyoError::store(format!(
                "Alias store {} contains key '{}' more than once",
                path.display(),
                alias.key
            ))
            .into());
        }
    }

    let max_id = data.aliases.iter().map(|alias| alias.id).max();
    if let Some(max_id) = max_id
        && data.next_id <= max_id
    {
        data.next_id = max_id.checked_add(1).ok_or_else(|| {
            PoyoError::store(format!(
                "Alias store {} has an alias id too large to continue from",
                path.display()
            ))
        })?;
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    const STORE: &str = "/home/user/.poyo.yaml";

    fn error_of(result: Result<Alias>) -> PoyoError {
        let err = result.unwrap_err();
        err.downcast_ref::<PoyoError>().cloned().unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let system = MockSystem::new();
        let store = YamlAliasStore::open(&system, STORE).unwrap();

        assert!(store.list().unwrap().is_empty());
        assert!(store.get("anything").unwrap().is_none());
        assert!(!system.exists(Path::new(STORE)).unwrap());
    }

    #[test]
    fn test_add_creates_parent_and_persists() {
        let system = MockSystem::new();
        let mut store = YamlAliasStore::open(&system, STORE).unwrap();
        store.add("greet", "echo hello {name}").unwrap();

        let reopened = YamlAliasStore::open(&system, STORE).unwrap();
        let alias = reopened.get("greet").unwrap().unwrap();
        assert_eq!(alias.command, "echo hello {name}");
    }

    #[test]
    fn test_add_duplicate_keeps_original() {
        let system = MockSystem::new();
        let mut store = YamlAliasStore::open(&system, STORE).unwrap();
        store.add("k", "c1").unwrap();

        assert_eq!(
            error_of(store.add("k", "c2")),
            PoyoError::already_exists("k")
        );
        assert_eq!(store.get("k").unwrap().unwrap().command, "c1");
    }

    #[test]
    fn test_update_keeps_position_and_id() {
        let system = MockSystem::new();
        let mut store = YamlAliasStore::open(&system, STORE).unwrap();
        let first = store.add("a", "one").unwrap();
        store.add("b", "two").unwrap();

        let updated = store.update("a", "uno").unwrap();

        assert_eq!(updated.id, first.id);
        let keys: Vec<_> = store.list().unwrap().into_iter().map(|a| a.key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(store.get("a").unwrap().unwrap().command, "uno");
    }

    #[test]
    fn test_update_and_delete_missing() {
        let system = MockSystem::new();
        let mut store = YamlAliasStore::open(&system, STORE).unwrap();

        assert_eq!(error_of(store.update("k", "c")), PoyoError::not_found("k"));
        assert_eq!(error_of(store.delete("k")), PoyoError::not_found("k"));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let system = MockSystem::new();
        let mut store = YamlAliasStore::open(&system, STORE).unwrap();
        store.add("a", "one").unwrap();
        let second = store.add("b", "two").unwrap();
        store.delete("b").unwrap();

        let mut reopened = YamlAliasStore::open(&system, STORE).unwrap();
        let third = reopened.add("c", "three").unwrap();
        assert!(third.id > second.id);
    }

    #[test]
    fn test_reads_hand_written_file() {
        let content = "aliases:\n  - id: 4\n    key: up\n    command: docker compose up -d\n";
        let system = MockSystem::new().with_file(STORE, content.as_bytes()).unwrap();

        let mut store = YamlAliasStore::open(&system, STORE).unwrap();
        assert_eq!(
            store.get("up").unwrap().unwrap().command,
            "docker compose up -d"
        );
        assert_eq!(store.add("down", "docker compose down").unwrap().id, 5);
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let system = MockSystem::new();
        YamlAliasStore::open(&system, STORE)
            .unwrap()
            .add("a", "one")
            .unwrap();

        let readonly = system.clone().with_failing_writes().unwrap();
        let mut store = YamlAliasStore::open(&readonly, STORE).unwrap();

        assert!(matches!(
            error_of(store.add("b", "two")),
            PoyoError::Store { .. }
        ));
        assert!(matches!(
            error_of(store.update("a", "uno")),
            PoyoError::Store { .. }
        ));
        assert!(matches!(
            error_of(store.delete("a")),
            PoyoError::Store { .. }
        ));

        assert!(store.get("b").unwrap().is_none());
        let aliases = store.list().unwrap();
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases[0].command, "one");
    }

    #[test]
    fn test_id_overflow_is_a_store_error() {
        let content = "aliases:\n  - {id: 18446744073709551615, key: a, command: x}\n";
        let system = MockSystem::new().with_file(STORE, content.as_bytes()).unwrap();

        let err = YamlAliasStore::open(&system, STORE).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PoyoError>(),
            Some(PoyoError::Store { .. })
        ));
    }

    #[test]
    fn test_exhausted_next_id_is_a_store_error() {
        let content = "next_id: 18446744073709551615\naliases: []\n";
        let system = MockSystem::new().with_file(STORE, content.as_bytes()).unwrap();
        let mut store = YamlAliasStore::open(&system, STORE).unwrap();

        assert!(matches!(
            error_of(store.add("a", "x")),
            PoyoError::Store { .. }
        ));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_blank_file_is_empty_store() {
        let system = MockSystem::new().with_file(STORE, b"\n").unwrap();
        let store = YamlAliasStore::open(&system, STORE).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_corrupt_file() {
        let system = MockSystem::new()
            .with_file(STORE, b"aliases: [ {key: a").unwrap();
        let result = YamlAliasStore::open(&system, STORE);
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_rejects_duplicate_keys_in_file() {
        let content = "aliases:\n  - {id: 0, key: a, command: x}\n  - {id: 1, key: a, command: y}\n";
        let system = MockSystem::new().with_file(STORE, content.as_bytes()).unwrap();
        let result = YamlAliasStore::open(&system, STORE);
        assert!(result.unwrap_err().to_string().contains("more than once"));
    }
}
