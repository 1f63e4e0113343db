use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of the cache medium itself. A plain miss is not an error
/// and is reported as `Ok(None)` by [`crate::store::CacheStore::get`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cache entry {key} is unreadable: {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },
    #[error("cache entry {key} is corrupt: {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
    #[error("cache entry {key} could not be encoded: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[error("cache write for {key} failed: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },
}
