use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing the local store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to serialize store: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write store: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to read store file: {0}")]
    ReadError(String),

    #[error("Invalid store data: {0}")]
    InvalidData(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A small JSON key-value file. Each key maps to a JSON object of fields,
/// and every mutation rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let json = fs::read_to_string(&path).map_err(|e| StoreError::ReadError(e.to_string()))?;
            if json.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&json)? {
                    Value::Object(map) => map,
                    other => {
                        return Err(StoreError::InvalidData(format!(
                            "expected an object at the top level, found {}",
                            other
                        )));
                    }
                }
            }
        } else {
            Map::new()
        };

        Ok(Self { path, entries })
    }

    /// Start from an empty store at `path`, ignoring whatever is on disk
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Map::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Map<String, Value>> {
        self.entries.get(key).and_then(Value::as_object)
    }

    /// Replace the record under `key` and persist
    pub fn put(&mut self, key: &str, record: Map<String, Value>) -> StoreResult<()> {
        self.entries.insert(key.to_owned(), Value::Object(record));
        self.flush()
    }

    /// Remove `key` and persist. Returns whether it was present.
    pub fn delete(&mut self, key: &str) -> StoreResult<bool> {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    fn flush(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, json)?;
        log::debug!("Store written to {}", self.path.display());
        Ok(())
    }
}
