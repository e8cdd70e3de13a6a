//! Mock system implementation for testing

use super::System;
use std::collections::{HashMap, HashSet};
use std::env::VarError;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory environment and filesystem
///
/// Clones share state, so a test can keep a handle while the code under test
/// holds another.
///
/// # Example
/// ```
/// use poyo::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_home("/home/user").unwrap()
///     .with_file("/home/user/.poyo.yaml", b"aliases: []").unwrap();
///
/// assert_eq!(system.home_dir().as_deref(), Some(Path::new("/home/user")));
/// assert!(system.exists(Path::new("/home/user/.poyo.yaml")).unwrap());
/// assert!(system.exists(Path::new("/home/user")).unwrap());
/// ```
#[derive(Clone, Default)]
pub struct MockSystem {
    state: Arc<RwLock<MockState>>,
}

#[derive(Default)]
struct MockState {
    env_vars: HashMap<String, String>,
    home: Option<PathBuf>,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    fail_writes: bool,
}

impl MockSystem {
    /// Empty filesystem, no environment and no home directory
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_env(self, key: &str, value: &str) -> io::Result<Self> {
        self.state_mut()?
            .env_vars
            .insert(key.to_owned(), value.to_owned());
        Ok(self)
    }

    /// Set the home directory reported by [`System::home_dir`]
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_home<P: AsRef<Path>>(self, home: P) -> io::Result<Self> {
        self.state_mut()?.home = Some(home.as_ref().to_path_buf());
        Ok(self)
    }

    /// Seed a file, creating its parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path = path.as_ref();
        let mut state = self.state_mut()?;
        if let Some(parent) = path.parent() {
            add_ancestors(&mut state.dirs, parent);
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Make every later [`System::write`] fail with `PermissionDenied`
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_failing_writes(self) -> io::Result<Self> {
        self.state_mut()?.fail_writes = true;
        Ok(self)
    }

    fn state(&self) -> io::Result<RwLockReadGuard<'_, MockState>> {
        self.state
            .read()
            .map_err(|err| io::Error::other(err.to_string()))
    }

    fn state_mut(&self) -> io::Result<RwLockWriteGuard<'_, MockState>> {
        self.state
            .write()
            .map_err(|err| io::Error::other(err.to_string()))
    }
}

fn add_ancestors(dirs: &mut HashSet<PathBuf>, path: &Path) {
    dirs.extend(
        path.ancestors()
            .take_while(|ancestor| !ancestor.as_os_str().is_empty())
            .map(Path::to_path_buf),
    );
}

impl System for MockSystem {
    #[inline]
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        let state = self.state().map_err(|_err| VarError::NotPresent)?;
        state.env_vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[inline]
    fn home_dir(&self) -> Option<PathBuf> {
        self.state().ok()?.home.clone()
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.state()?.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.state_mut()?;
        if state.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Read-only filesystem: {}", path.display()),
            ));
        }

        let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
        if let Some(parent) = parent
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        add_ancestors(&mut self.state_mut()?.dirs, path);
        Ok(())
    }

    #[inline]
    fn exists(&self, path: &Path) -> io::Result<bool> {
        let state = self.state()?;
        Ok(state.files.contains_key(path) || state.dirs.contains(path))
    }
}
