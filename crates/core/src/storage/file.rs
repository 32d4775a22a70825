use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::CoreError;

use super::traits::KeyValueStore;

const TMP_SUFFIX: &str = "tmp";

/// Key-value store backed by a single JSON object on disk (native only).
///
/// Every write rewrites the whole file through a temporary sibling and an
/// atomic rename, so a crash mid-write leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`. Parent directories are
    /// created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_raw(&self) -> Result<Option<String>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn parse_entries(&self, raw: &str) -> Result<BTreeMap<String, String>, CoreError> {
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(raw).map_err(|e| {
            CoreError::Storage(format!(
                "Store file {} is not a JSON object of strings: {e}",
                self.path.display()
            ))
        })
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, CoreError> {
        match self.read_raw()? {
            Some(raw) => self.parse_entries(&raw),
            None => Ok(BTreeMap::new()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        // A corrupt file is replaced; a file that cannot be read is left alone.
        let mut entries = match self.read_raw()? {
            Some(raw) => self.parse_entries(&raw).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "replacing corrupt store file");
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
