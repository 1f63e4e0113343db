pub mod config;
pub mod error;
pub mod fingerprint;
pub mod logging;
pub mod record;
pub mod store;

pub use config::{CacheConfig, CoreConfig};
pub use error::{CoreError, CoreResult, StoreError};
pub use fingerprint::fingerprint;
pub use record::{ClientInfo, OsInfo, ParsedRecord, RecordView, StoredClient, StoredOs, StoredRecord};
pub use store::{CacheStore, FileStore, MemoryStore};
