use crate::error::StoreError;
use crate::record::StoredRecord;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Key-value persistence for producer-written parse results.
///
/// Absence is a normal outcome and comes back as `Ok(None)`; only
/// medium failures (unreadable file, undecodable content) are errors.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<StoredRecord>, StoreError>;
    /// Last-write-wins. A failed write is surfaced, never swallowed.
    fn put(&self, key: &str, record: &StoredRecord) -> Result<(), StoreError>;
}

/// One JSON document per entry under `root/<shard>/<key>.json`, where
/// the shard is the first two key characters. Sharding keeps directory
/// listings small when a producer warms millions of user agents.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let shard = if key.len() >= 2 { &key[..2] } else { "00" };
        self.root.join(shard).join(format!("{key}.json"))
    }
}

impl CacheStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<StoredRecord>, StoreError> {
        let path = self.entry_path(key);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    key: key.to_string(),
                    source,
                })
            }
        };
        let record = serde_json::from_slice(&data).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(record))
    }

    fn put(&self, key: &str, record: &StoredRecord) -> Result<(), StoreError> {
        let data = serde_json::to_vec(record).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        let path = self.entry_path(key);
        let dir = path.parent().unwrap_or_else(|| self.root.as_path());
        let write_err = |source| StoreError::Write {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(dir).map_err(write_err)?;
        // write-then-rename so a concurrent reader never sees a torn entry
        let tmp = dir.join(format!(".{key}.{}.tmp", std::process::id()));
        fs::write(&tmp, &data).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)?;
        debug!(%key, "cache entry written");
        Ok(())
    }
}

/// In-process backend for tests and embedders that warm a transient cache.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, StoredRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<StoredRecord>, StoreError> {
        Ok(self.inner.lock().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, record: &StoredRecord) -> Result<(), StoreError> {
        self.inner
            .lock()
            .unwrap()
            .insert(key.to_string(), record.clone());
        Ok(())
    }
}
