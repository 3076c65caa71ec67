//! File-backed key-value storage.

use super::KeyValueStorage;
use kaiwa_core::error::{KaiwaError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each key as one file beneath a base directory.
///
/// Keys are used directly as file names, so they must be simple identifiers
/// (no path separators).
///
/// ```text
/// base_dir/
/// └── conversations
/// ```
pub struct FileKeyValueStorage {
    base_dir: PathBuf,
}

impl FileKeyValueStorage {
    /// Creates a store rooted at `base_dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Creates a store at the default location (~/.kaiwa).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the
    /// directory cannot be created.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| KaiwaError::io("Failed to get home directory"))?;
        Self::new(home_dir.join(".kaiwa"))
    }

    /// Returns the directory the store writes into.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(KaiwaError::invalid_input(format!(
                "storage key must be a plain file name, got '{}'",
                key
            )));
        }
        Ok(self.base_dir.join(key))
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::write(&path, value)?;
        Ok(())
    }
}
