use crate::cached::CachedRecord;
use crate::parser::{ParseError, UserAgentParser};
use thiserror::Error;
use tracing::{debug, warn};
use uacache_core::{fingerprint, CacheStore, ClientInfo, OsInfo, ParsedRecord, RecordView};

#[derive(Debug, Error)]
pub enum DetectError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// One detection result, cache-backed or freshly parsed. Callers read
/// both variants through [`RecordView`] and cannot tell them apart.
#[derive(Debug, Clone)]
pub enum Detection {
    Cached(CachedRecord),
    Parsed(ParsedRecord),
}

impl RecordView for Detection {
    fn bot(&self) -> Option<&str> {
        match self {
            Detection::Cached(r) => r.bot(),
            Detection::Parsed(r) => r.bot(),
        }
    }

    fn brand(&self) -> &str {
        match self {
            Detection::Cached(r) => r.brand(),
            Detection::Parsed(r) => r.brand(),
        }
    }

    fn client(&self) -> ClientInfo {
        match self {
            Detection::Cached(r) => r.client(),
            Detection::Parsed(r) => r.client(),
        }
    }

    fn device(&self) -> u32 {
        match self {
            Detection::Cached(r) => r.device(),
            Detection::Parsed(r) => r.device(),
        }
    }

    fn model(&self) -> &str {
        match self {
            Detection::Cached(r) => r.model(),
            Detection::Parsed(r) => r.model(),
        }
    }

    fn os(&self) -> OsInfo {
        match self {
            Detection::Cached(r) => r.os(),
            Detection::Parsed(r) => r.os(),
        }
    }
}

/// Cache-first detection. The store and parser are injected at
/// construction; the factory holds no other state.
pub struct DetectorFactory {
    store: Box<dyn CacheStore>,
    parser: Box<dyn UserAgentParser>,
}

impl DetectorFactory {
    pub fn new(store: Box<dyn CacheStore>, parser: Box<dyn UserAgentParser>) -> Self {
        Self { store, parser }
    }

    /// Returns the producer-written entry for `user_agent` when one
    /// exists, otherwise the parser's live result. The factory never
    /// writes back; cache population belongs to the producer.
    ///
    /// Store read failures other than a plain miss are logged and
    /// treated as a miss so lookups stay available.
    pub fn lookup(&self, user_agent: &str) -> Result<Detection, DetectError> {
        let key = fingerprint(user_agent);
        match self.store.get(&key) {
            Ok(Some(raw)) => {
                debug!(%key, "cache hit");
                return Ok(Detection::Cached(CachedRecord::new(raw)));
            }
            Ok(None) => debug!(%key, "cache miss"),
            Err(err) => warn!(%key, error = %err, "unreadable cache entry, falling back to parser"),
        }
        let parsed = self.parser.parse(user_agent)?;
        Ok(Detection::Parsed(parsed))
    }
}
