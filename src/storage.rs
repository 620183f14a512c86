use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::warn;
use serde::Deserialize;
use thiserror::Error;

pub const QUIZ_KEY: &str = "quiz";
pub const SUMMARY_KEY: &str = "summary";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access stored value '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode value for '{0}': {1}")]
    Encode(String, serde_json::Error),

    #[error("Stored value '{0}' is unreadable: {1}")]
    Decode(String, serde_json::Error),
}

/// String-keyed store of JSON documents. Nothing expires on its own.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per entry inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

fn io_error(key: &str) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key)(e)),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(io_error(key))?;
        fs::write(self.path(key), value).map_err(io_error(key))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(io_error(key)(e)),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StoredSummary {
    summarised_notes: String,
}

/// Generated notes saved under `summary`. A value that is there but cannot be
/// read is an error, not an absence.
pub fn load_summary(storage: &dyn Storage) -> Result<Option<String>, StorageError> {
    let Some(raw) = storage.get(SUMMARY_KEY)? else {
        return Ok(None);
    };
    let summary = serde_json::from_str::<StoredSummary>(&raw).map_err(|e| {
        warn!("stored summary is unreadable: {}", e);
        StorageError::Decode(SUMMARY_KEY.to_string(), e)
    })?;
    Ok(Some(summary.summarised_notes))
}
