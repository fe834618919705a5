//! File-backed key-value store.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use catalog_cache::{CacheError, KeyValueStore};
use tempfile::NamedTempFile;

use crate::output::Output;

/// A [`KeyValueStore`] persisted as one JSON object of string values.
///
/// The file is re-read on every call so separate CLI invocations see each
/// other's writes. Writes go to a temporary sibling that is renamed over the
/// file, so a crash leaves either the old or the new contents.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    output: Option<Output>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`, creating parent directories.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CacheError::OpenError(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        Ok(Self { path, output: None })
    }

    /// Report recoveries through `output`.
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CacheError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| CacheError::StoreError(format!("{}: {}", self.path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                if let Some(output) = &self.output {
                    output.warn(&format!(
                        "Store {} is unreadable ({}); starting empty",
                        self.path.display(),
                        e
                    ));
                }
                let empty = BTreeMap::new();
                self.save(&empty)?;
                Ok(empty)
            }
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let content = serde_json::to_string_pretty(entries)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let store_error = |e: std::io::Error| {
            CacheError::StoreError(format!("{}: {}", self.path.display(), e))
        };

        let mut file = NamedTempFile::new_in(dir).map_err(store_error)?;
        file.write_all(content.as_bytes()).map_err(store_error)?;
        file.as_file().sync_all().map_err(store_error)?;
        file.persist(&self.path).map_err(|e| store_error(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.load()?.remove(key).map(String::into_bytes))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let value = String::from_utf8(value.to_vec())
            .map_err(|_| CacheError::StoreError(format!("value for `{}` is not UTF-8", key)))?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.save(&entries)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
