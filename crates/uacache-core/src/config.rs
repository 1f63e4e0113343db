use crate::error::{CoreError, CoreResult};
use crate::store::FileStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoreConfig {
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    pub root_dir: Option<PathBuf>,
}

impl CacheConfig {
    pub fn open_store(&self) -> CoreResult<FileStore> {
        let root = self
            .root_dir
            .clone()
            .ok_or_else(|| CoreError::Config("cache.root_dir is required".to_string()))?;
        Ok(FileStore::new(root))
    }
}
