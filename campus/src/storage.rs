//! Key-value backends the reaction snapshot is written to.

use std::{
    collections::HashMap,
    fs::{self, create_dir_all, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use file_lock::{FileLock, FileOptions};

use crate::error::StorageError;

/// A place where whole values are stored under string keys.
///
/// Values are replaced wholesale, there are no partial updates.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` means nothing was ever stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<key>.ron` inside a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}
impl FileStore {
    pub fn new<P>(base_path: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let base_path = base_path.as_ref().to_path_buf();
        create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.ron"))
    }
    fn sibling(&self, key: &str, suffix: &str) -> PathBuf {
        self.base_path.join(format!("{key}.ron.{suffix}"))
    }
}
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        // Writers only ever rename a complete file into place.
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let options = FileOptions::new().write(true).create(true);
        let _lock = FileLock::lock(self.sibling(key, "lock"), true, options)?;

        let tmp = self.sibling(key, "tmp");
        let mut buf = BufWriter::new(File::create(&tmp)?);
        buf.write_all(value.as_bytes())?;
        buf.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }
}

/// Keeps values in process memory only; nothing survives the session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(String::from(key), String::from(value));
        Ok(())
    }
}
